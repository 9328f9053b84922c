//! Turtle 1.1 serializer for annotation graphs.
//!
//! Triples are grouped by subject, then by predicate, with objects sharing a
//! predicate joined by `,`. IRIs are abbreviated to `prefix:local` when the
//! local part is a valid Turtle local name, and written as `<...>` otherwise.

use crate::model::{Graph, Iri};
use crate::namespaces::Namespace;

/// Serializes `graph` to Turtle, declaring `namespaces` as prefixes.
#[must_use]
pub fn to_turtle(graph: &Graph, namespaces: &[Namespace]) -> String {
    let mut out = String::with_capacity(64 * graph.len() + 256);

    for ns in namespaces {
        out.push_str(&format!("@prefix {}: <{}> .\n", ns.prefix, ns.iri));
    }
    out.push('\n');

    let mut current_subject: Option<&Iri> = None;
    let mut current_predicate: Option<&Iri> = None;
    for t in graph.iter() {
        if current_subject == Some(&t.subject) {
            if current_predicate == Some(&t.predicate) {
                out.push_str(",\n        ");
            } else {
                out.push_str(" ;\n    ");
                out.push_str(&term(&t.predicate, namespaces));
                out.push(' ');
            }
        } else {
            if current_subject.is_some() {
                out.push_str(" .\n\n");
            }
            out.push_str(&term(&t.subject, namespaces));
            out.push('\n');
            out.push_str("    ");
            out.push_str(&term(&t.predicate, namespaces));
            out.push(' ');
        }
        out.push_str(&term(&t.object, namespaces));
        current_subject = Some(&t.subject);
        current_predicate = Some(&t.predicate);
    }
    if current_subject.is_some() {
        out.push_str(" .\n");
    }

    out
}

/// Renders an IRI as a prefixed name when possible, else as an IRI reference.
/// The longest matching namespace wins.
fn term(iri: &Iri, namespaces: &[Namespace]) -> String {
    namespaces
        .iter()
        .filter_map(|ns| ns.strip(iri.as_str()).map(|local| (ns, local)))
        .filter(|(_, local)| is_local_name(local))
        .max_by_key(|(ns, _)| ns.iri.len())
        .map_or_else(
            || iri_ref(iri.as_str()),
            |(ns, local)| format!("{}:{}", ns.prefix, local),
        )
}

/// Conservative ASCII subset of Turtle's `PN_LOCAL`.
fn is_local_name(local: &str) -> bool {
    let bytes = local.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    let inner = |b: &u8| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.');
    (first.is_ascii_alphanumeric() || *first == b'_')
        && *last != b'.'
        && bytes.iter().all(inner)
}

/// Writes `<iri>`, escaping characters not allowed in `IRIREF` as `\uXXXX`.
pub(crate) fn iri_ref(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len() + 2);
    out.push('<');
    for c in iri.chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\u{0}'..=' ' => {
                out.push_str(&format!("\\u{:04X}", u32::from(c)));
            }
            _ => out.push(c),
        }
    }
    out.push('>');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::{self, bqbiol, omex, uberon};

    fn sample() -> Graph {
        let mut g = Graph::new();
        let local = omex::local_node(1025);
        let lv = uberon::term("0016514");
        g.insert(local.clone(), bqbiol::is(), uberon::blood());
        g.insert(local.clone(), bqbiol::is_part_of(), lv);
        let var = omex::model_variable("models/cvs-model.cellml", "lv.blood.volume");
        g.insert(var.clone(), bqbiol::is_property_of(), local);
        g
    }

    #[test]
    fn declares_all_prefixes() {
        let ttl = to_turtle(&sample(), &namespaces::ALL);
        for ns in namespaces::ALL {
            assert!(
                ttl.contains(&format!("@prefix {}: <{}> .", ns.prefix, ns.iri)),
                "Missing prefix declaration for '{}'",
                ns.prefix
            );
        }
    }

    #[test]
    fn abbreviates_and_groups() {
        let ttl = to_turtle(&sample(), &namespaces::ALL);
        assert!(ttl.contains(
            "local:local-node-1025\n    bqbiol:is UBERON:0000178 ;\n    bqbiol:isPartOf UBERON:0016514 .\n"
        ));
    }

    #[test]
    fn variable_iris_stay_full() {
        let ttl = to_turtle(&sample(), &namespaces::ALL);
        assert!(ttl.contains(
            "<http://omex-library.org/models/cvs-model.cellml#lv.blood.volume>\n    bqbiol:isPropertyOf local:local-node-1025 .\n"
        ));
    }

    #[test]
    fn shared_predicate_objects_use_commas() {
        let mut g = Graph::new();
        let s = Iri::from("http://example.org/s");
        g.insert(s.clone(), bqbiol::is(), uberon::term("1"));
        g.insert(s, bqbiol::is(), uberon::term("2"));
        let ttl = to_turtle(&g, &namespaces::ALL);
        assert!(ttl.contains("bqbiol:is UBERON:1,\n        UBERON:2 .\n"));
    }

    #[test]
    fn local_name_rules() {
        assert!(is_local_name("0016514"));
        assert!(is_local_name("OPB_00154"));
        assert!(is_local_name("local-node-1025"));
        assert!(!is_local_name(""));
        assert!(!is_local_name("a."));
        assert!(!is_local_name("-a"));
        assert!(!is_local_name("m.cellml#lv"));
        assert!(!is_local_name("models/m"));
    }

    #[test]
    fn escapes_iri_ref() {
        assert_eq!(iri_ref("http://a/b c"), "<http://a/b\\u0020c>");
    }

    #[test]
    fn empty_graph_has_only_prefixes() {
        let ttl = to_turtle(&Graph::new(), &namespaces::ALL);
        assert_eq!(ttl.lines().filter(|l| !l.is_empty()).count(), 5);
    }
}
