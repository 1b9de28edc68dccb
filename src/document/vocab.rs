//! JSON-LD keys and SNAP ontology predicates the builder reads

/// Root key holding the element list
pub const GRAPH: &str = "@graph";
pub const ID: &str = "@id";
pub const TYPE: &str = "@type";
pub const LABEL: &str = "rdfs:label";

/// Element is a node owning one or more bonds (edges keyed by the bond's id)
pub const HAS_BOND: &str = "snap:has-bond";

/// Element is a node linked to a place; the link has no id of its own.
///
/// Both spellings appear in published SNAP documents.
pub const ASSOCIATED_PLACE: [&str; 2] = ["snap:associated-place", "snap:associatedPlace"];

/// Element is itself a bond pointing at its target node
pub const BOND_WITH: &str = "snap:bond-with";
