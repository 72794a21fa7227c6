//! MiniJinja filter registration.

use minijinja::{Environment, Error, Value};

/// Registers the filters used by the document template.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Joins a sequence of class names into one attribute value.
    // Usage: <body class="{{ body_classes | class_list }}">
    env.add_filter("class_list", |value: Value| -> Result<String, Error> {
        let mut classes = Vec::new();
        for item in value.try_iter()? {
            classes.push(item.to_string());
        }
        Ok(classes.join(" "))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_joins_with_spaces() {
        let mut env = Environment::new();
        register_filters(&mut env);
        env.add_template("t", "{{ classes | class_list }}").unwrap();

        let output = env
            .get_template("t")
            .unwrap()
            .render(serde_json::json!({ "classes": ["antialiased", "map-shell"] }))
            .unwrap();
        assert_eq!(output, "antialiased map-shell");
    }

    #[test]
    fn test_class_list_empty_sequence() {
        let mut env = Environment::new();
        register_filters(&mut env);
        env.add_template("t", "{{ classes | class_list }}").unwrap();

        let output = env
            .get_template("t")
            .unwrap()
            .render(serde_json::json!({ "classes": [] }))
            .unwrap();
        assert_eq!(output, "");
    }
}
