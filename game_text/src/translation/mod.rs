//! Translatable text values.

mod hash;

pub use hash::djb2_hash;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A piece of text that can be shown to the player.
///
/// Holds the source string plus the optional context and plural form used to
/// pick a translation. Content data writes it either as a bare string or as an
/// object with `str`, `ctxt`, `str_pl` or `str_sp` members. Text shown
/// verbatim in every language is written as an object with
/// `"no_translation": true`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TranslationRepr", into = "TranslationRepr")]
pub struct Translation {
    raw: String,
    ctxt: Option<String>,
    raw_pl: Option<String>,
    needs_translation: bool,
}

impl Translation {
    /// Create text that goes through translation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ctxt: None,
            raw_pl: None,
            needs_translation: true,
        }
    }

    /// Create text that is displayed verbatim in every language.
    pub fn no_translation(raw: impl Into<String>) -> Self {
        Self {
            needs_translation: false,
            ..Self::new(raw)
        }
    }

    /// The empty text.
    pub const fn empty() -> Self {
        Self {
            raw: String::new(),
            ctxt: None,
            raw_pl: None,
            needs_translation: false,
        }
    }

    /// Set the translation context.
    pub fn with_context(mut self, ctxt: impl Into<String>) -> Self {
        self.ctxt = Some(ctxt.into());
        self
    }

    /// Set the plural form.
    pub fn with_plural(mut self, raw_pl: impl Into<String>) -> Self {
        self.raw_pl = Some(raw_pl.into());
        self
    }

    /// Source text, before translation.
    pub fn untranslated(&self) -> &str {
        &self.raw
    }

    pub fn context(&self) -> Option<&str> {
        self.ctxt.as_deref()
    }

    pub fn plural(&self) -> Option<&str> {
        self.raw_pl.as_deref()
    }

    pub fn needs_translation(&self) -> bool {
        self.needs_translation
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Text as displayed to the player.
    ///
    /// Locale selection lives outside this crate, so the displayed text is
    /// the singular source string.
    pub fn translated(&self) -> String {
        self.raw.clone()
    }

    /// Hash used by saves that predate stable snippet ids.
    ///
    /// Only plain translated strings ever had one. Text with a context or
    /// plural form was introduced later and has no legacy representation.
    pub fn legacy_hash(&self) -> Option<i32> {
        if self.needs_translation && self.ctxt.is_none() && self.raw_pl.is_none() {
            Some(djb2_hash(self.raw.as_bytes()))
        } else {
            None
        }
    }
}

impl Default for Translation {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.translated())
    }
}

/// On-disk shape of a [`Translation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TranslationRepr {
    Plain(String),
    Detailed {
        #[serde(rename = "str", default, skip_serializing_if = "Option::is_none")]
        raw: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ctxt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        str_pl: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        str_sp: Option<String>,
        #[serde(default, skip_serializing_if = "is_false")]
        no_translation: bool,
    },
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TryFrom<TranslationRepr> for Translation {
    type Error = String;

    fn try_from(repr: TranslationRepr) -> Result<Self, Self::Error> {
        match repr {
            TranslationRepr::Plain(raw) => Ok(Translation::new(raw)),
            TranslationRepr::Detailed {
                raw,
                ctxt,
                str_pl,
                str_sp,
                no_translation,
            } => {
                let (raw, raw_pl) = match (raw, str_pl, str_sp) {
                    (Some(_), _, Some(_)) | (None, Some(_), Some(_)) => {
                        return Err("`str_sp` cannot be combined with `str` or `str_pl`".into())
                    }
                    (None, _, Some(same)) => (same.clone(), Some(same)),
                    (Some(raw), pl, None) => (raw, pl),
                    (None, _, None) => return Err("missing member `str`".into()),
                };
                Ok(Translation {
                    raw,
                    ctxt,
                    raw_pl,
                    needs_translation: !no_translation,
                })
            }
        }
    }
}

impl From<Translation> for TranslationRepr {
    fn from(text: Translation) -> Self {
        let no_translation = !text.needs_translation;
        if !no_translation && text.ctxt.is_none() && text.raw_pl.is_none() {
            return TranslationRepr::Plain(text.raw);
        }
        let (raw, str_pl, str_sp) = if text.raw_pl.as_ref() == Some(&text.raw) {
            (None, None, text.raw_pl)
        } else {
            (Some(text.raw), text.raw_pl, None)
        };
        TranslationRepr::Detailed {
            raw,
            ctxt: text.ctxt,
            str_pl,
            str_sp,
            no_translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_translation_creation() {
        let text = Translation::new("A rusty key");
        assert_eq!(text.untranslated(), "A rusty key");
        assert_eq!(text.translated(), "A rusty key");
        assert!(text.needs_translation());
        assert!(text.context().is_none());
    }

    #[test]
    fn test_empty_translation() {
        let text = Translation::default();
        assert!(text.is_empty());
        assert_eq!(text.translated(), "");
        assert!(text.legacy_hash().is_none());
    }

    #[test]
    fn test_legacy_hash_only_for_plain_text() {
        let plain = Translation::new("a");
        assert_eq!(plain.legacy_hash(), Some(177_670));

        assert!(Translation::new("a").with_context("noun").legacy_hash().is_none());
        assert!(Translation::new("a").with_plural("as").legacy_hash().is_none());
        assert!(Translation::no_translation("a").legacy_hash().is_none());
    }

    #[test]
    fn test_deserialize_plain_string() {
        let text: Translation = serde_json::from_value(json!("Hello")).unwrap();
        assert_eq!(text, Translation::new("Hello"));
    }

    #[test]
    fn test_deserialize_object_forms() {
        let text: Translation =
            serde_json::from_value(json!({ "str": "bank", "ctxt": "river" })).unwrap();
        assert_eq!(text.untranslated(), "bank");
        assert_eq!(text.context(), Some("river"));

        let text: Translation = serde_json::from_value(json!({ "str_sp": "sheep" })).unwrap();
        assert_eq!(text.untranslated(), "sheep");
        assert_eq!(text.plural(), Some("sheep"));

        let text: Translation =
            serde_json::from_value(json!({ "str": "wolf", "str_pl": "wolves" })).unwrap();
        assert_eq!(text.plural(), Some("wolves"));
    }

    #[test]
    fn test_deserialize_rejects_bad_shapes() {
        assert!(serde_json::from_value::<Translation>(json!(42)).is_err());
        assert!(serde_json::from_value::<Translation>(json!({ "ctxt": "x" })).is_err());
        assert!(
            serde_json::from_value::<Translation>(json!({ "str": "a", "str_sp": "a" })).is_err()
        );
    }

    #[test]
    fn test_serialize_shortest_form() {
        assert_eq!(serde_json::to_value(Translation::new("Hi")).unwrap(), json!("Hi"));
        assert_eq!(
            serde_json::to_value(Translation::new("sheep").with_plural("sheep")).unwrap(),
            json!({ "str_sp": "sheep" })
        );
        assert_eq!(
            serde_json::to_value(Translation::no_translation("OK")).unwrap(),
            json!({ "str": "OK", "no_translation": true })
        );
    }

    #[test]
    fn test_serialize_then_deserialize_keeps_every_form() {
        let texts = [
            Translation::new("a"),
            Translation::no_translation("a"),
            Translation::empty(),
            Translation::new("bank").with_context("river"),
            Translation::new("wolf").with_plural("wolves"),
            Translation::new("sheep").with_plural("sheep"),
            Translation::no_translation("km").with_context("unit").with_plural("km"),
        ];

        for text in texts {
            let value = serde_json::to_value(&text).unwrap();
            let read: Translation = serde_json::from_value(value).unwrap();
            assert_eq!(read, text);
            assert_eq!(read.legacy_hash(), text.legacy_hash());
        }
    }

    #[test]
    fn test_no_translation_text_stays_without_legacy_hash() {
        let value = serde_json::to_value(Translation::no_translation("a")).unwrap();
        let read: Translation = serde_json::from_value(value).unwrap();
        assert!(!read.needs_translation());
        assert!(read.legacy_hash().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Translation::new("Boo").to_string(), "Boo");
    }
}
