// Pattern: Flyweight
// Font family and style (intrinsic state) are shared through a factory;
// each document keeps only its own text, size and color (extrinsic state).

use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub family: String,
    pub style: String,
}

impl FontKey {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

/// Shared, immutable font description.
#[derive(Debug, PartialEq, Eq)]
pub struct FontFlyweight {
    key: FontKey,
}

impl FontFlyweight {
    pub fn family(&self) -> &str {
        &self.key.family
    }

    pub fn style(&self) -> &str {
        &self.key.style
    }
}

#[derive(Debug, Default)]
pub struct FontFactory {
    fonts: HashMap<FontKey, Rc<FontFlyweight>>,
}

impl FontFactory {
    /// Empty factory; fonts are created on first request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory preloaded with the common document fonts.
    pub fn with_common_fonts() -> Self {
        let mut factory = Self::new();
        for (family, style) in [
            ("Arial", "Regular"),
            ("Arial", "Bold"),
            ("Times New Roman", "Regular"),
            ("Times New Roman", "Italic"),
            ("Verdana", "Regular"),
        ] {
            factory.font(family, style);
        }
        factory
    }

    pub fn font(&mut self, family: &str, style: &str) -> Rc<FontFlyweight> {
        let key = FontKey::new(family, style);
        let font = self.fonts.entry(key.clone()).or_insert_with(|| {
            debug!(family, style, "creating font flyweight");
            Rc::new(FontFlyweight { key })
        });
        Rc::clone(font)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    font_size: u32,
    font_color: String,
    font: Rc<FontFlyweight>,
}

impl Document {
    pub fn new(
        text: impl Into<String>,
        font: Rc<FontFlyweight>,
        font_size: u32,
        font_color: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            font_size,
            font_color: font_color.into(),
            font,
        }
    }

    pub fn font(&self) -> &Rc<FontFlyweight> {
        &self.font
    }

    pub fn render(&self) -> Vec<String> {
        vec![
            format!("Rendering text: {}", self.text),
            format!("Font Family: {}", self.font.family()),
            format!("Font Style: {}", self.font.style()),
            format!("Font Size: {}", self.font_size),
            format!("Font Color: {}", self.font_color),
        ]
    }
}

pub fn run_demo() {
    let mut fonts = FontFactory::with_common_fonts();

    let documents = [
        Document::new("Document 1: Introduction", fonts.font("Arial", "Regular"), 12, "Black"),
        Document::new("Document 2: Conclusion", fonts.font("Times New Roman", "Italic"), 14, "Blue"),
        Document::new("Document 3: Summary", fonts.font("Arial", "Bold"), 10, "Red"),
    ];

    println!("Rendering Documents:");
    for (i, document) in documents.iter().enumerate() {
        if i > 0 {
            println!("---");
        }
        for line in document.render() {
            println!("{line}");
        }
    }
    println!("Shared fonts in factory: {}", fonts.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_key_same_instance() {
        let mut fonts = FontFactory::new();
        let a = fonts.font("Arial", "Bold");
        let b = fonts.font("Arial", "Bold");
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(fonts.len(), 1);
    }

    #[test]
    fn test_different_keys_distinct_instances() {
        let mut fonts = FontFactory::new();
        let bold = fonts.font("Arial", "Bold");
        let regular = fonts.font("Arial", "Regular");
        assert!(!Rc::ptr_eq(&bold, &regular));
        assert_eq!(fonts.len(), 2);
    }

    #[test]
    fn test_preloaded_fonts_are_reused() {
        let mut fonts = FontFactory::with_common_fonts();
        assert_eq!(fonts.len(), 5);
        fonts.font("Verdana", "Regular");
        assert_eq!(fonts.len(), 5);
        fonts.font("Courier", "Regular");
        assert_eq!(fonts.len(), 6);
    }

    #[test]
    fn test_documents_share_font() {
        let mut fonts = FontFactory::new();
        let one = Document::new("one", fonts.font("Arial", "Regular"), 12, "Black");
        let two = Document::new("two", fonts.font("Arial", "Regular"), 18, "Red");
        assert!(Rc::ptr_eq(one.font(), two.font()));
        assert_eq!(Rc::strong_count(one.font()), 3);
    }

    #[test]
    fn test_render_lines() {
        let mut fonts = FontFactory::new();
        let doc = Document::new("Hi", fonts.font("Verdana", "Regular"), 9, "Green");
        assert_eq!(
            doc.render(),
            vec![
                "Rendering text: Hi",
                "Font Family: Verdana",
                "Font Style: Regular",
                "Font Size: 9",
                "Font Color: Green",
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_registry_never_exceeds_distinct_keys(
            requests in proptest::collection::vec((0usize..4, 0usize..3), 0..40)
        ) {
            let families = ["Arial", "Verdana", "Georgia", "Courier"];
            let styles = ["Regular", "Bold", "Italic"];
            let mut fonts = FontFactory::new();
            let mut distinct = HashSet::new();

            for (f, s) in requests {
                let font = fonts.font(families[f], styles[s]);
                prop_assert_eq!(font.family(), families[f]);
                prop_assert_eq!(font.style(), styles[s]);
                distinct.insert((f, s));
            }
            prop_assert_eq!(fonts.len(), distinct.len());
        }
    }
}
