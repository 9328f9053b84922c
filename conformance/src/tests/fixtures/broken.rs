//! Non-conforming artifacts, one broken invariant each.

/// Two blood entities that are both part of the left ventricle.
pub const DUPLICATE_ENTITY: &str = r#"@prefix UBERON: <http://purl.obolibrary.org/obo/UBERON_> .
@prefix local: <http://omex-library.org/annotations.ttl#> .
@prefix bqbiol: <http://biomodels.net/biology-qualifiers/> .

local:local-node-1025
    bqbiol:is UBERON:0000178 ;
    bqbiol:isPartOf UBERON:0016514 .

local:local-node-1026
    bqbiol:is UBERON:0000178 ;
    bqbiol:isPartOf UBERON:0016514 .
"#;

/// A variable that is a property of an entity the artifact never defines.
pub const DANGLING_PROPERTY: &str = r#"@prefix OPB: <http://bhi.washington.edu/OPB#> .
@prefix local: <http://omex-library.org/annotations.ttl#> .
@prefix bqbiol: <http://biomodels.net/biology-qualifiers/> .

<http://omex-library.org/models/cvs-model.cellml#rv.blood.volume>
    bqbiol:isPropertyOf local:local-node-2000 ;
    bqbiol:isVersionOf OPB:OPB_00154 .
"#;

/// A variable with no physical-property term.
pub const MISSING_VERSION: &str = r#"@prefix UBERON: <http://purl.obolibrary.org/obo/UBERON_> .
@prefix local: <http://omex-library.org/annotations.ttl#> .
@prefix bqbiol: <http://biomodels.net/biology-qualifiers/> .

local:local-node-1025
    bqbiol:is UBERON:0000178 ;
    bqbiol:isPartOf UBERON:0016509 .

<http://omex-library.org/models/cvs-model.cellml#rv.blood.pressure>
    bqbiol:isPropertyOf local:local-node-1025 .
"#;
