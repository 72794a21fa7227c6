use std::cell::RefCell;
use std::rc::Rc;

use serial_test::serial;
use sightsignal_shell::{
    set_mode_detector, ColorMode, FontConfig, Metadata, RootShell, ThemePreference,
};

#[test]
fn test_mounted_shell_broadcasts_to_independent_consumers() {
    let shell = RootShell::builder()
        .default_theme(ThemePreference::Light)
        .build()
        .unwrap();

    let sidebar = shell.theme();
    let map_view = shell.theme();

    let sidebar_seen = Rc::new(RefCell::new(ThemePreference::Light));
    let map_seen = Rc::new(RefCell::new(ThemePreference::Light));
    let sink = Rc::clone(&sidebar_seen);
    sidebar.subscribe(move |pref| *sink.borrow_mut() = pref);
    let sink = Rc::clone(&map_seen);
    map_view.subscribe(move |pref| *sink.borrow_mut() = pref);

    shell.theme().set_by_name("dark").unwrap();

    assert_eq!(sidebar.current(), ThemePreference::Dark);
    assert_eq!(map_view.current(), ThemePreference::Dark);
    assert_eq!(*sidebar_seen.borrow(), ThemePreference::Dark);
    assert_eq!(*map_seen.borrow(), ThemePreference::Dark);
}

#[test]
fn test_invalid_theme_name_is_rejected_without_side_effects() {
    let shell = RootShell::builder()
        .default_theme(ThemePreference::Light)
        .build()
        .unwrap();

    let handle = shell.theme();
    assert!(handle.set_by_name("high-contrast").is_err());
    assert_eq!(handle.current(), ThemePreference::Light);

    let html = shell.render("").unwrap();
    assert!(html.contains(r#"data-theme="light""#));
}

#[test]
fn test_document_reflects_configuration_end_to_end() {
    let shell = RootShell::builder()
        .metadata(Metadata::new("SightSignal", "Map-first signals.").lang("en"))
        .fonts([FontConfig::new("Space Grotesk", "--font-body")
            .fallback("sans-serif")
            .subset("latin")
            .weights([400, 700])])
        .stylesheets(["/assets/globals.css".to_string()])
        .build()
        .unwrap();

    let html = shell.render("<main id=\"map\">sightings</main>").unwrap();

    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<title>SightSignal</title>"));
    assert!(html.contains(r#"<meta name="description" content="Map-first signals.">"#));
    assert!(html.contains("family=Space+Grotesk:wght@400;700"));
    assert!(html.contains("--font-body: 'Space Grotesk', sans-serif;"));
    assert!(html.contains(r#"<link rel="stylesheet" href="/assets/globals.css">"#));
    assert!(html.contains("<main id=\"map\">sightings</main>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_unmount_releases_theme_state() {
    let first = RootShell::builder().build().unwrap();
    first.theme().set(ThemePreference::Dark);
    assert_eq!(first.theme().current(), ThemePreference::Dark);
    drop(first);

    let second = RootShell::builder().build().unwrap();
    assert_eq!(second.theme().current(), ThemePreference::System);
    assert!(!second.render("").unwrap().contains("data-theme"));
}

#[test]
#[serial]
fn test_system_preference_resolves_through_detector() {
    let shell = RootShell::builder().build().unwrap();
    let handle = shell.theme();
    assert_eq!(handle.current(), ThemePreference::System);

    set_mode_detector(|| ColorMode::Dark);
    assert_eq!(handle.resolved(), ColorMode::Dark);

    set_mode_detector(|| ColorMode::Light);
    assert_eq!(handle.resolved(), ColorMode::Light);
}
