//! DMN 1.x XML writer (spec §6.2).
//!
//! Spec §1 is explicit that "the concrete XML serializer dialect" is an
//! external collaborator's concern, not the translation algorithm's — but
//! §6.2 still names the document shape this crate must produce, and a real
//! writer is needed to satisfy it. `quick-xml` drives event emission here,
//! the same crate `dhilipsiva-lojban-NeSy` already depends on for a
//! different document format, per the "never fall back to hand-rolled
//! string concatenation" rule.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::model::{Decision, DmnDocument, InformationRequirement, InputData, RequirementSource};

const DMN_NS: &str = "https://www.omg.org/spec/DMN/20191111/MODEL/";
const DMNDI_NS: &str = "https://www.omg.org/spec/DMN/20191111/DMNDI/";
const DC_NS: &str = "https://www.omg.org/spec/DMN/20191111/DC/";
const DI_NS: &str = "https://www.omg.org/spec/DMN/20191111/DI/";
const BIODI_NS: &str = "https://plugins.camunda.org/schema/1.0/DMNDI";

/// Renders `doc` as a DMN 1.x XML document (spec §6.2).
///
/// The writer never fails on an in-memory buffer, so this returns a plain
/// `String` rather than threading a serialization error through the
/// public API — any failure here would indicate a `quick-xml` bug, not a
/// translation problem.
#[must_use]
pub fn render(doc: &DmnDocument) -> String {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None))).expect("writing to a Vec<u8> cannot fail");

    let mut definitions = BytesStart::new("definitions");
    definitions.push_attribute(("xmlns", DMN_NS));
    definitions.push_attribute(("xmlns:dmndi", DMNDI_NS));
    definitions.push_attribute(("xmlns:dc", DC_NS));
    definitions.push_attribute(("xmlns:di", DI_NS));
    definitions.push_attribute(("xmlns:biodi", BIODI_NS));
    definitions.push_attribute(("id", doc.id.as_str()));
    definitions.push_attribute(("name", "javael-translation"));
    definitions.push_attribute(("namespace", "https://javael-to-dmn/"));
    writer.write_event(Event::Start(definitions)).expect("writing to a Vec<u8> cannot fail");

    for decision in &doc.decisions {
        write_decision(&mut writer, decision);
    }
    for input in &doc.input_data {
        write_input_data(&mut writer, input);
    }
    write_diagram(&mut writer, doc);

    writer.write_event(Event::End(BytesEnd::new("definitions"))).expect("writing to a Vec<u8> cannot fail");

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).expect("quick-xml only ever writes valid UTF-8")
}

fn write_decision(writer: &mut Writer<Cursor<Vec<u8>>>, decision: &Decision) {
    let mut start = BytesStart::new("decision");
    start.push_attribute(("id", decision.id.as_str()));
    start.push_attribute(("name", decision.name.as_str()));
    writer.write_event(Event::Start(start)).expect("writing to a Vec<u8> cannot fail");

    for requirement in &decision.requirements {
        write_information_requirement(writer, requirement);
    }

    let mut table = BytesStart::new("decisionTable");
    table.push_attribute(("id", decision.table.id.as_str()));
    table.push_attribute(("hitPolicy", "UNIQUE"));
    writer.write_event(Event::Start(table)).expect("writing to a Vec<u8> cannot fail");

    for input in &decision.table.inputs {
        let mut input_start = BytesStart::new("input");
        input_start.push_attribute(("id", input.id.as_str()));
        input_start.push_attribute(("label", input.label.as_str()));
        writer.write_event(Event::Start(input_start)).expect("writing to a Vec<u8> cannot fail");

        let mut expr_start = BytesStart::new("inputExpression");
        expr_start.push_attribute(("id", input.expression_id.as_str()));
        expr_start.push_attribute(("typeRef", "string"));
        writer.write_event(Event::Start(expr_start)).expect("writing to a Vec<u8> cannot fail");
        write_text_element(writer, "text", &input.label);
        writer.write_event(Event::End(BytesEnd::new("inputExpression"))).expect("writing to a Vec<u8> cannot fail");

        writer.write_event(Event::End(BytesEnd::new("input"))).expect("writing to a Vec<u8> cannot fail");
    }

    let mut output = BytesStart::new("output");
    output.push_attribute(("id", decision.table.output.id.as_str()));
    output.push_attribute(("label", decision.table.output.label.as_str()));
    writer.write_event(Event::Empty(output)).expect("writing to a Vec<u8> cannot fail");

    for rule in &decision.table.rules {
        let mut rule_start = BytesStart::new("rule");
        rule_start.push_attribute(("id", rule.id.as_str()));
        writer.write_event(Event::Start(rule_start)).expect("writing to a Vec<u8> cannot fail");
        for entry in &rule.input_entries {
            writer.write_event(Event::Start(BytesStart::new("inputEntry"))).expect("writing to a Vec<u8> cannot fail");
            write_text_element(writer, "text", entry);
            writer.write_event(Event::End(BytesEnd::new("inputEntry"))).expect("writing to a Vec<u8> cannot fail");
        }
        writer.write_event(Event::Start(BytesStart::new("outputEntry"))).expect("writing to a Vec<u8> cannot fail");
        write_text_element(writer, "text", &rule.output_entry);
        writer.write_event(Event::End(BytesEnd::new("outputEntry"))).expect("writing to a Vec<u8> cannot fail");
        writer.write_event(Event::End(BytesEnd::new("rule"))).expect("writing to a Vec<u8> cannot fail");
    }

    writer.write_event(Event::End(BytesEnd::new("decisionTable"))).expect("writing to a Vec<u8> cannot fail");
    writer.write_event(Event::End(BytesEnd::new("decision"))).expect("writing to a Vec<u8> cannot fail");
}

fn write_information_requirement(writer: &mut Writer<Cursor<Vec<u8>>>, requirement: &InformationRequirement) {
    let mut start = BytesStart::new("informationRequirement");
    start.push_attribute(("id", requirement.id.as_str()));
    writer.write_event(Event::Start(start)).expect("writing to a Vec<u8> cannot fail");

    let (tag, target) = match &requirement.source {
        RequirementSource::Decision(id) => ("requiredDecision", id),
        RequirementSource::InputData(id) => ("requiredInput", id),
    };
    let href = format!("#{target}");
    let mut reference = BytesStart::new(tag);
    reference.push_attribute(("href", href.as_str()));
    writer.write_event(Event::Empty(reference)).expect("writing to a Vec<u8> cannot fail");

    writer.write_event(Event::End(BytesEnd::new("informationRequirement"))).expect("writing to a Vec<u8> cannot fail");
}

fn write_input_data(writer: &mut Writer<Cursor<Vec<u8>>>, input: &InputData) {
    let mut start = BytesStart::new("inputData");
    start.push_attribute(("id", input.id.as_str()));
    start.push_attribute(("name", input.name.as_str()));
    writer.write_event(Event::Empty(start)).expect("writing to a Vec<u8> cannot fail");
}

fn write_diagram(writer: &mut Writer<Cursor<Vec<u8>>>, doc: &DmnDocument) {
    writer.write_event(Event::Start(BytesStart::new("dmndi:DMNDI"))).expect("writing to a Vec<u8> cannot fail");
    let mut diagram_start = BytesStart::new("dmndi:DMNDiagram");
    diagram_start.push_attribute(("id", "DMNDiagram_0"));
    writer.write_event(Event::Start(diagram_start)).expect("writing to a Vec<u8> cannot fail");

    for shape in &doc.diagram.shapes {
        let mut shape_start = BytesStart::new("dmndi:DMNShape");
        shape_start.push_attribute(("id", shape.id.as_str()));
        shape_start.push_attribute(("dmnElementRef", shape.element_ref.as_str()));
        writer.write_event(Event::Start(shape_start)).expect("writing to a Vec<u8> cannot fail");

        let mut bounds = BytesStart::new("dc:Bounds");
        bounds.push_attribute(("x", shape.bounds.x.to_string().as_str()));
        bounds.push_attribute(("y", shape.bounds.y.to_string().as_str()));
        bounds.push_attribute(("width", shape.bounds.width.to_string().as_str()));
        bounds.push_attribute(("height", shape.bounds.height.to_string().as_str()));
        writer.write_event(Event::Empty(bounds)).expect("writing to a Vec<u8> cannot fail");

        writer.write_event(Event::End(BytesEnd::new("dmndi:DMNShape"))).expect("writing to a Vec<u8> cannot fail");
    }

    for edge in &doc.diagram.edges {
        let mut edge_start = BytesStart::new("dmndi:DMNEdge");
        edge_start.push_attribute(("id", edge.id.as_str()));
        edge_start.push_attribute(("dmnElementRef", edge.element_ref.as_str()));
        writer.write_event(Event::Start(edge_start)).expect("writing to a Vec<u8> cannot fail");

        for (x, y) in &edge.waypoints {
            let mut waypoint = BytesStart::new("di:waypoint");
            waypoint.push_attribute(("x", x.to_string().as_str()));
            waypoint.push_attribute(("y", y.to_string().as_str()));
            writer.write_event(Event::Empty(waypoint)).expect("writing to a Vec<u8> cannot fail");
        }

        writer.write_event(Event::End(BytesEnd::new("dmndi:DMNEdge"))).expect("writing to a Vec<u8> cannot fail");
    }

    writer.write_event(Event::End(BytesEnd::new("dmndi:DMNDiagram"))).expect("writing to a Vec<u8> cannot fail");
    writer.write_event(Event::End(BytesEnd::new("dmndi:DMNDI"))).expect("writing to a Vec<u8> cannot fail");
}

fn write_text_element(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) {
    writer.write_event(Event::Start(BytesStart::new(tag))).expect("writing to a Vec<u8> cannot fail");
    writer.write_event(Event::Text(BytesText::new(text))).expect("writing to a Vec<u8> cannot fail");
    writer.write_event(Event::End(BytesEnd::new(tag))).expect("writing to a Vec<u8> cannot fail");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DecisionTable, InputClause, OutputClause, Rule};

    #[test]
    fn render_emits_namespaced_root_and_one_decision() {
        let doc = DmnDocument {
            id: "Definitions_0".into(),
            decisions: vec![Decision {
                id: "Decision_0".into(),
                name: "Decision_0".into(),
                table: DecisionTable {
                    id: "DecisionTable_0".into(),
                    inputs: vec![InputClause { id: "Input_0".into(), label: "field".into(), expression_id: "InputExpression_0".into() }],
                    output: OutputClause { id: "Output_0".into(), label: "result".into() },
                    rules: vec![
                        Rule { id: "DecisionRule_0".into(), input_entries: vec!["null".into()], output_entry: "true".into() },
                        Rule { id: "DecisionRule_1".into(), input_entries: vec!["-".into()], output_entry: "false".into() },
                    ],
                },
                requirements: vec![InformationRequirement { id: "InformationRequirement_0".into(), source: RequirementSource::InputData("InputData_0".into()) }],
            }],
            input_data: vec![InputData { id: "InputData_0".into(), name: "field".into() }],
            diagram: crate::model::Diagram::default(),
        };

        let xml = render(&doc);
        assert!(xml.contains("xmlns=\"https://www.omg.org/spec/DMN/20191111/MODEL/\""));
        assert!(xml.contains("<decision id=\"Decision_0\""));
        assert!(xml.contains("<inputData id=\"InputData_0\" name=\"field\"/>"));
        assert!(xml.contains("requiredInput href=\"#InputData_0\""));
    }
}
