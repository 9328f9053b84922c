//! A conforming artifact: the left-ventricle volume and pressure share one
//! entity, and an unknown cavity falls back to `UBERON:0001062`.

/// Annotations for `lv.blood.volume`, `lv.blood.pressure` and
/// `unknown-cavity.blood.volume`.
pub const ANNOTATED: &str = r#"@prefix OPB: <http://bhi.washington.edu/OPB#> .
@prefix UBERON: <http://purl.obolibrary.org/obo/UBERON_> .
@prefix OMEXlib: <http://omex-library.org/> .
@prefix local: <http://omex-library.org/annotations.ttl#> .
@prefix bqbiol: <http://biomodels.net/biology-qualifiers/> .

local:local-node-1025
    bqbiol:is UBERON:0000178 ;
    bqbiol:isPartOf UBERON:0016514 .

local:local-node-1026
    bqbiol:is UBERON:0000178 ;
    bqbiol:isPartOf UBERON:0001062 .

<http://omex-library.org/models/cvs-model.cellml#lv.blood.pressure>
    bqbiol:isPropertyOf local:local-node-1025 ;
    bqbiol:isVersionOf OPB:OPB_00509 .

<http://omex-library.org/models/cvs-model.cellml#lv.blood.volume>
    bqbiol:isPropertyOf local:local-node-1025 ;
    bqbiol:isVersionOf OPB:OPB_00154 .

<http://omex-library.org/models/cvs-model.cellml#unknown-cavity.blood.volume>
    bqbiol:isPropertyOf local:local-node-1026 ;
    bqbiol:isVersionOf OPB:OPB_00154 .
"#;
