// Report client domain model

/// A client the service can build reports for, tied to the zone the CDN
/// identifies their property by.
#[derive(Debug, Clone)]
pub struct Client {
    pub name: String,
    pub zone_tag: String,
}

impl Client {
    pub fn new(name: impl Into<String>, zone_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            zone_tag: zone_tag.into(),
        }
    }

    /// Human readable name used in report headings.
    pub fn display_name(&self) -> String {
        // Convert "Acme_Corp_" to "Acme Corp"
        self.name.trim_end_matches('_').replace('_', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_drops_underscores() {
        let client = Client::new("Acme_Corp_", "0123abcd");
        assert_eq!(client.display_name(), "Acme Corp");

        let client = Client::new("Planet_72", "0123abcd");
        assert_eq!(client.display_name(), "Planet 72");
    }
}
