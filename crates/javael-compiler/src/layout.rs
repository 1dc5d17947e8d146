//! Layout (spec §4.11): BFS over the DRD dependency graph, positioning
//! shapes on a 2-D canvas and connecting them with two-waypoint edges.
//!
//! The dependency graph mirrors the DMN node tree spec §4.11 describes,
//! built here from [`DmnDocument`]'s `decisions`/`input_data`/
//! `informationRequirement`s rather than from the (already consumed)
//! [`crate::dmn_tree::DmnNode`] tree — same shape, built from the emitted
//! document instead of a second walk over intermediate state. `petgraph`
//! backs the BFS, matching the teacher's use of it for compiler-internal
//! graphs.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use rustc_hash::FxHashMap;

use crate::model::{Diagram, DmnDocument, PositionedEdge, PositionedShape, RequirementSource, Shape};

/// Horizontal spacing between sibling shapes.
const X_STEP: f64 = 180.0;
/// Vertical spacing between parent and child rows.
const Y_STEP: f64 = 120.0;
/// Default shape width.
const SHAPE_WIDTH: f64 = 150.0;
/// Default shape height.
const SHAPE_HEIGHT: f64 = 60.0;

/// An element a shape can reference: either a decision or an input-data
/// leaf. Used only to key the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ElementKind {
    Decision,
    InputData,
}

/// Lays out `doc`'s decisions and input data, populating `doc.diagram`.
///
/// BFS starts from the root decision — the one no other decision's
/// `informationRequirement` points at — placing each child one `Y_STEP`
/// row below its parent and spreading siblings `X_STEP` apart, matching
/// spec §4.11's "`(parent.x + sibling-offset, parent.y + row-height)`".
pub fn layout(doc: &mut DmnDocument) {
    if doc.decisions.is_empty() {
        doc.diagram = Diagram::default();
        return;
    }

    let mut graph = DiGraph::<(ElementKind, String), ()>::new();
    let mut index_of: FxHashMap<String, NodeIndex> = FxHashMap::default();

    for decision in &doc.decisions {
        let idx = graph.add_node((ElementKind::Decision, decision.id.clone()));
        index_of.insert(decision.id.clone(), idx);
    }
    for input in &doc.input_data {
        let idx = graph.add_node((ElementKind::InputData, input.id.clone()));
        index_of.insert(input.id.clone(), idx);
    }
    // Edge parent -> dependency, so a BFS from the root walks top-down.
    for decision in &doc.decisions {
        let parent_idx = index_of[&decision.id];
        for requirement in &decision.requirements {
            let target = match &requirement.source {
                RequirementSource::Decision(id) | RequirementSource::InputData(id) => id,
            };
            if let Some(&child_idx) = index_of.get(target) {
                graph.add_edge(parent_idx, child_idx, ());
            }
        }
    }

    let root_id = doc
        .decisions
        .iter()
        .find(|decision| graph.neighbors_directed(index_of[&decision.id], Direction::Incoming).next().is_none())
        .map_or_else(|| doc.decisions[0].id.clone(), |decision| decision.id.clone());
    let root_idx = index_of[&root_id];

    let mut depth_of: FxHashMap<NodeIndex, usize> = FxHashMap::default();
    depth_of.insert(root_idx, 0);
    let mut order = Vec::new();
    let mut bfs = Bfs::new(&graph, root_idx);
    while let Some(idx) = bfs.next(&graph) {
        order.push(idx);
        let depth = depth_of[&idx];
        for neighbor in graph.neighbors_directed(idx, Direction::Outgoing) {
            depth_of.entry(neighbor).or_insert(depth + 1);
        }
    }

    let mut next_x_at_depth: FxHashMap<usize, f64> = FxHashMap::default();
    let mut bounds: FxHashMap<NodeIndex, Shape> = FxHashMap::default();
    for idx in &order {
        let depth = depth_of[idx];
        let x = *next_x_at_depth.entry(depth).or_insert(0.0);
        next_x_at_depth.insert(depth, x + X_STEP);
        bounds.insert(*idx, Shape { x, y: depth as f64 * Y_STEP, width: SHAPE_WIDTH, height: SHAPE_HEIGHT });
    }

    let mut diagram = Diagram::default();
    let mut id_counter = 0usize;
    for idx in &order {
        let (_, element_id) = &graph[*idx];
        id_counter += 1;
        diagram.shapes.push(PositionedShape {
            id: format!("DMNShape_{id_counter}"),
            element_ref: element_id.clone(),
            bounds: bounds[idx],
        });
    }

    let mut edge_counter = 0usize;
    for decision in &doc.decisions {
        let parent_idx = index_of[&decision.id];
        let Some(parent_shape) = bounds.get(&parent_idx) else { continue };
        for requirement in &decision.requirements {
            let target = match &requirement.source {
                RequirementSource::Decision(id) | RequirementSource::InputData(id) => id,
            };
            let Some(&child_idx) = index_of.get(target) else { continue };
            let Some(child_shape) = bounds.get(&child_idx) else { continue };
            edge_counter += 1;
            diagram.edges.push(PositionedEdge {
                id: format!("DMNEdge_{edge_counter}"),
                element_ref: requirement.id.clone(),
                waypoints: vec![center(child_shape), center(parent_shape)],
            });
        }
    }

    doc.diagram = diagram;
}

fn center(shape: &Shape) -> (f64, f64) { (shape.x + shape.width / 2.0, shape.y + shape.height / 2.0) }
