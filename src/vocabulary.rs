//! Closed vocabularies recognized in manifest fields

/// A fixed, case-sensitive set of accepted terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

impl Vocabulary {
    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|known| *known == term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Operator capability levels (`metadata.annotations.capabilities`)
pub static CAPABILITIES: Vocabulary = Vocabulary {
    name: "capabilities",
    terms: &[
        "Basic Install",
        "Seamless Upgrades",
        "Full Lifecycle",
        "Deep Insights",
        "Auto Pilot",
    ],
};

/// Catalog categories (`metadata.annotations.categories`)
pub static CATEGORIES: Vocabulary = Vocabulary {
    name: "categories",
    terms: &[
        "AI/Machine Learning",
        "Application Runtime",
        "Big Data",
        "Cloud Provider",
        "Database",
        "Developer Tools",
        "Drivers and plugins",
        "Integration & Delivery",
        "Logging & Tracing",
        "Modernization & Migration",
        "Monitoring",
        "Networking",
        "OpenShift Optional",
        "Security",
        "Storage",
        "Streaming & Messaging",
    ],
};

/// Media types accepted for `spec.icon` payloads
pub static ICON_MEDIA_TYPES: Vocabulary = Vocabulary {
    name: "media-types",
    terms: &["image/gif", "image/jpeg", "image/png", "image/svg+xml"],
};

/// Every vocabulary, for listing
pub static ALL: [&Vocabulary; 3] = [&CAPABILITIES, &CATEGORIES, &ICON_MEDIA_TYPES];

/// Find a vocabulary by name
pub fn by_name(name: &str) -> Option<&'static Vocabulary> {
    ALL.iter().copied().find(|vocab| vocab.name == name)
}
