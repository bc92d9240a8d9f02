//! The FlashML tag grammar

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The tag every document must have at top level
pub const ROOT_TAG: &str = "velocista";

const POWERS: [&str; 7] = [
    "superspeed",
    "phasing",
    "cryokinesis",
    "vibration",
    "timetravel",
    "speedforce",
    "metahuman",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRule {
    /// `None` means the tag may appear anywhere, including at document level
    pub allowed_parents: Option<Vec<&'static str>>,
    pub required_attributes: Vec<&'static str>,
    pub optional_attributes: Vec<&'static str>,
}

impl TagRule {
    fn anywhere(optional_attributes: &[&'static str]) -> Self {
        Self {
            allowed_parents: None,
            required_attributes: Vec::new(),
            optional_attributes: optional_attributes.to_vec(),
        }
    }

    fn within(
        allowed_parents: &[&'static str],
        required_attributes: &[&'static str],
        optional_attributes: &[&'static str],
    ) -> Self {
        Self {
            allowed_parents: Some(allowed_parents.to_vec()),
            required_attributes: required_attributes.to_vec(),
            optional_attributes: optional_attributes.to_vec(),
        }
    }

    /// Whether the tag may be a child of `parent` (`None` is the document itself)
    pub fn allows_parent(&self, parent: Option<&str>) -> bool {
        match (&self.allowed_parents, parent) {
            (None, _) => true,
            (Some(parents), Some(parent)) => parents.iter().any(|allowed| *allowed == parent),
            (Some(_), None) => false,
        }
    }

    pub fn allows_attribute(&self, name: &str) -> bool {
        self.required_attributes
            .iter()
            .chain(&self.optional_attributes)
            .any(|allowed| *allowed == name)
    }
}

static GRAMMAR: Lazy<HashMap<&'static str, TagRule>> = Lazy::new(|| {
    let with_powers = |base: &[&'static str]| -> Vec<&'static str> {
        base.iter().copied().chain(POWERS).collect()
    };
    let sections = [
        "titulo", "escena", "personaje", "poder", "imagen", "villanos", "lugar", "equipo",
    ];

    let mut grammar = HashMap::new();
    let mut root_children = vec!["titulo", "episodio"];
    root_children.extend(&sections[1..]);
    grammar.insert(ROOT_TAG, TagRule::anywhere(&root_children));
    grammar.insert("titulo", TagRule::within(&["velocista", "episodio"], &[], &[]));
    grammar.insert(
        "episodio",
        TagRule::within(&["velocista", "temporada"], &[], &sections),
    );
    grammar.insert(
        "temporada",
        TagRule::within(&["velocista"], &["numero"], &["episodio", "titulo"]),
    );
    grammar.insert(
        "escena",
        TagRule::within(
            &["velocista", "episodio"],
            &[],
            &with_powers(&["personaje", "dialogo", "accion", "poder"]),
        ),
    );
    grammar.insert(
        "personaje",
        TagRule::within(
            &["velocista", "episodio", "escena", "lugar", "equipo"],
            &["nombre"],
            &["actor", "poder"],
        ),
    );
    grammar.insert(
        "poder",
        TagRule::within(&["velocista", "episodio", "escena", "personaje"], &[], &[]),
    );
    grammar.insert(
        "dialogo",
        TagRule::within(&["escena", "personaje"], &[], &with_powers(&["rapido"])),
    );
    grammar.insert("rapido", TagRule::within(&["dialogo"], &[], &[]));
    grammar.insert(
        "accion",
        TagRule::within(&["escena", "personaje"], &[], &with_powers(&["velocidad"])),
    );
    grammar.insert(
        "imagen",
        TagRule::within(&["velocista", "episodio", "personaje"], &["src"], &["alt"]),
    );
    grammar.insert(
        "villanos",
        TagRule::within(&["velocista", "episodio"], &[], &["villano"]),
    );
    grammar.insert(
        "villano",
        TagRule::within(&["villanos"], &["nombre"], &["poder"]),
    );
    for power in POWERS {
        grammar.insert(
            power,
            TagRule::within(&["dialogo", "escena", "personaje", "accion"], &[], &[]),
        );
    }
    for place in ["lugar", "equipo"] {
        grammar.insert(
            place,
            TagRule::within(&["velocista", "episodio", "escena"], &["nombre"], &["personaje"]),
        );
    }
    grammar
});

/// The rule for `tag_name`, or `None` for tags outside the vocabulary
pub fn rule_for(tag_name: &str) -> Option<&'static TagRule> {
    GRAMMAR.get(tag_name)
}
