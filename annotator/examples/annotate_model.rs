//! Annotates a small inline CellML model and prints the result.
//!
//! Run with: `cargo run --example annotate_model -p cvs-annotator`

use cvs_annotator::{annotate_document, Format};

const MODEL: &str = r#"<?xml version="1.0"?>
<model xmlns="http://www.cellml.org/cellml/1.1#"
       xmlns:cmeta="http://www.cellml.org/metadata/1.0#" name="demo">
  <component name="heart">
    <variable name="V_lv" units="m3" cmeta:id="lv.blood.volume"/>
    <variable name="P_lv" units="Pa" cmeta:id="lv.blood.pressure"/>
    <variable name="P_liver" units="Pa" cmeta:id="liver.blood.pressure"/>
    <variable name="Q_aa" units="m3_per_s" cmeta:id="aa.blood.flow"/>
  </component>
</model>"#;

fn main() {
    let annotation = match annotate_document(MODEL, "models/demo.cellml") {
        Ok(annotation) => annotation,
        Err(e) => {
            eprintln!("annotation failed: {e}");
            return;
        }
    };

    println!("Annotated model:");
    println!("  Volume IDs:      {}", annotation.ids.volume_ids.len());
    println!("  Pressure IDs:    {}", annotation.ids.pressure_ids.len());
    println!("  Flow IDs:        {}", annotation.ids.flow_ids.len());
    println!("  Local entities:  {}", annotation.local_entities);
    println!("  Triples:         {}", annotation.graph.len());
    println!();
    print!("{}", Format::Turtle.serialize(&annotation.graph));
}
