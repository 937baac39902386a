//! Host element capability.
//!
//! The binding never talks to a concrete UI tree. It sees the host node
//! through the [`ElementHandle`] trait: a stable identity plus a typed read
//! of named string attributes. The surrounding UI framework owns the node's
//! lifecycle entirely; this crate only observes it.

/// Opaque descriptor of the host UI node a viewer binds to.
///
/// Implementations are provided by the embedding layer (a DOM bridge, a
/// server-rendered component host, a test double). The binding reads the
/// configuration attribute lazily, at initialization time, so attribute
/// values set between attach and the settle delay are picked up.
pub trait ElementHandle: Send + Sync + 'static {
    /// Stable identity of the element. The external viewer is constructed
    /// against this identity.
    fn id(&self) -> &str;

    /// Read a named string attribute, `None` when absent.
    fn attribute(&self, name: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapElement {
        id: String,
        attrs: HashMap<String, String>,
    }

    impl ElementHandle for MapElement {
        fn id(&self) -> &str {
            &self.id
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs.get(name).cloned()
        }
    }

    #[test]
    fn test_attribute_lookup() {
        let element = MapElement {
            id: "viewer-1".to_string(),
            attrs: HashMap::from([(
                "data-info-url".to_string(),
                "https://example.org/iiif/img1".to_string(),
            )]),
        };

        assert_eq!(element.id(), "viewer-1");
        assert_eq!(
            element.attribute("data-info-url").as_deref(),
            Some("https://example.org/iiif/img1")
        );
        assert_eq!(element.attribute("data-missing"), None);
    }
}
