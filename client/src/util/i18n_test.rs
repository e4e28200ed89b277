use super::*;

#[test]
fn default_language_is_english() {
    assert_eq!(Language::default(), Language::En);
    assert_eq!(Language::En.code(), "en");
    assert_eq!(Language::Ko.code(), "ko");
}

#[test]
fn toggled_flips_between_languages() {
    assert_eq!(Language::En.toggled(), Language::Ko);
    assert_eq!(Language::Ko.toggled(), Language::En);
}

#[test]
fn translate_resolves_known_keys_per_language() {
    assert_eq!(translate(Language::En, "nav.docs"), "Docs");
    assert_eq!(translate(Language::Ko, "nav.docs"), "문서");
}

#[test]
fn translate_echoes_unknown_key() {
    assert_eq!(translate(Language::En, "home.missing.key"), "home.missing.key");
    assert_eq!(translate(Language::Ko, "home.missing.key"), "home.missing.key");
}

#[test]
fn translate_with_substitutes_placeholders() {
    assert_eq!(
        translate_with(Language::En, "download.button", &[("platform", "macOS")]),
        "Download for macOS"
    );
    assert_eq!(
        translate_with(Language::Ko, "download.button", &[("platform", "Linux")]),
        "Linux용 다운로드"
    );
}

#[test]
fn translate_with_leaves_unmatched_placeholders() {
    assert_eq!(
        translate_with(Language::En, "download.button", &[("os", "macOS")]),
        "Download for {platform}"
    );
}

#[test]
fn both_tables_cover_the_same_keys() {
    let en: Vec<&str> = EN.iter().map(|(k, _)| *k).collect();
    let ko: Vec<&str> = KO.iter().map(|(k, _)| *k).collect();
    assert_eq!(en, ko);
}

#[test]
fn tables_have_no_duplicate_keys() {
    let mut keys: Vec<&str> = EN.iter().map(|(k, _)| *k).collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn document_language_is_not_applied_outside_browser() {
    assert!(!apply_document_language(Language::En));
    assert!(!apply_document_language(Language::Ko));
}
