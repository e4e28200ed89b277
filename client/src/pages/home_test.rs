use super::*;

#[test]
fn section_text_joins_prefix_and_field() {
    assert_eq!(section_text(Language::En, "home.features.secure", "title"), "Secure");
    assert_eq!(section_text(Language::Ko, "home.features.secure", "title"), "보안");
}

#[test]
fn every_feature_has_title_and_description() {
    for (_, prefix) in HOME_FEATURES {
        for field in ["title", "description"] {
            let key = format!("{prefix}.{field}");
            assert_ne!(section_text(Language::En, prefix, field), key, "missing {key}");
        }
    }
}

#[test]
fn testimonial_prefix_is_one_based() {
    assert_eq!(testimonial_prefix(0), "home.testimonials.testimonial1");
    assert_eq!(testimonial_prefix(2), "home.testimonials.testimonial3");
}

#[test]
fn every_testimonial_resolves() {
    for index in 0..TESTIMONIAL_COUNT {
        let prefix = testimonial_prefix(index);
        for field in ["name", "role", "content"] {
            let key = format!("{prefix}.{field}");
            assert_ne!(section_text(Language::Ko, &prefix, field), key, "missing {key}");
        }
    }
}

#[test]
fn initial_takes_first_character() {
    assert_eq!(initial("Minjun Kim"), "M");
    assert_eq!(initial("김민준"), "김");
    assert_eq!(initial(""), "");
}
