//! The DMN document model (spec §6.2): decisions, input data, and the
//! diagram shapes/edges the layout engine positions.
//!
//! This is deliberately a plain value tree, not the DMN node tree from
//! [`crate::dmn_tree`] — the builder consumes one `DmnNode` per compile and
//! produces this, which [`crate::backend::xml`] then serializes. Keeping the
//! two separate means the builder's post-order walk and the writer's
//! depth-first emission never have to agree on the same traversal order.

/// A decision table rule row: one input entry per [`DecisionTable::inputs`]
/// column (empty string means "don't care"), plus one output entry.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Element id (`DecisionRule_…`).
    pub id: String,
    /// One entry per input column, in column order. An empty string is a
    /// FEEL unary-test "don't care" dash.
    pub input_entries: Vec<String>,
    /// The literal or FEEL expression produced when this row matches.
    pub output_entry: String,
}

/// One input column of a decision table: a label plus the FEEL expression
/// evaluated against it (usually just the identifier or decision output it
/// reads from).
#[derive(Debug, Clone)]
pub struct InputClause {
    /// Element id (`Input_…`).
    pub id: String,
    /// Column label, shown as the header.
    pub label: String,
    /// Element id of the nested `inputExpression` (`InputExpression_…`).
    pub expression_id: String,
}

/// The single output column of a decision table.
#[derive(Debug, Clone)]
pub struct OutputClause {
    /// Element id (`Output_…`).
    pub id: String,
    /// Output label.
    pub label: String,
}

/// A DMN `decisionTable`: the hit policy is always unique-first-match, the
/// only policy spec §4.9/§4.10 require.
#[derive(Debug, Clone)]
pub struct DecisionTable {
    /// Element id (`DecisionTable_…`).
    pub id: String,
    /// Input columns, left to right.
    pub inputs: Vec<InputClause>,
    /// The single output column.
    pub output: OutputClause,
    /// Rule rows, in the order they must be evaluated (first match wins).
    pub rules: Vec<Rule>,
}

/// What a [`InformationRequirement`] points at: another `decision`'s output,
/// or an `inputData` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementSource {
    /// References a `decision` element's id.
    Decision(String),
    /// References an `inputData` element's id.
    InputData(String),
}

/// A DMN `informationRequirement`: declares that a decision consumes
/// another decision's output or an input-data value.
#[derive(Debug, Clone)]
pub struct InformationRequirement {
    /// Element id (`InformationRequirement_…`).
    pub id: String,
    /// What is required.
    pub source: RequirementSource,
}

/// One `decision` element: either an `Operator`'s canonical table or an
/// `Expression`'s DNF-derived table (spec §4.9), or a ternary root/predicate
/// table (spec §4.10).
#[derive(Debug, Clone)]
pub struct Decision {
    /// Element id (`Decision_…`).
    pub id: String,
    /// Display name, derived from the DMN node's FEEL text or operator kind.
    pub name: String,
    /// The nested decision table.
    pub table: DecisionTable,
    /// Dependencies on other decisions or input-data elements.
    pub requirements: Vec<InformationRequirement>,
}

/// One `inputData` element — a leaf representing an externally supplied
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputData {
    /// Element id (`InputData_…`).
    pub id: String,
    /// The identifier's name, as it appears in FEEL text.
    pub name: String,
}

/// A `DMNShape`: a rectangle positioned on the diagram canvas, referencing
/// either a `decision` or an `inputData` element.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    /// `x` coordinate of the shape's top-left corner.
    pub x: f64,
    /// `y` coordinate of the shape's top-left corner.
    pub y: f64,
    /// Shape width.
    pub width: f64,
    /// Shape height.
    pub height: f64,
}

impl Shape {
    /// Returns `true` if this shape's bounds overlap `other`'s.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// A positioned shape, tagged with the element id it renders.
#[derive(Debug, Clone)]
pub struct PositionedShape {
    /// Element id (`DMNShape_…`).
    pub id: String,
    /// The `decision`/`inputData` element id this shape renders.
    pub element_ref: String,
    /// The shape's bounds.
    pub bounds: Shape,
}

/// A `DMNEdge` connecting a dependent decision's shape to a dependency's
/// shape, with waypoints ordered child-then-parent per spec §4.11.
#[derive(Debug, Clone)]
pub struct PositionedEdge {
    /// Element id (`DMNEdge_…`).
    pub id: String,
    /// The `informationRequirement` element id this edge renders.
    pub element_ref: String,
    /// Waypoints, child shape center first, parent shape center last.
    pub waypoints: Vec<(f64, f64)>,
}

/// The `dmndi:DMNDI` subtree: one diagram's shapes and edges.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    /// Every positioned shape, one per decision/input-data element.
    pub shapes: Vec<PositionedShape>,
    /// Every positioned edge, one per information requirement.
    pub edges: Vec<PositionedEdge>,
}

/// The assembled DMN document (spec §6.2): decisions, input data, and the
/// diagram, ready for [`crate::backend::xml::render`].
#[derive(Debug, Clone, Default)]
pub struct DmnDocument {
    /// Root element id (`Definitions_…`), carried for the XML writer.
    pub id: String,
    /// Every `decision` element, in the order they were built (leaves
    /// first, matching the post-order walk over the DMN tree).
    pub decisions: Vec<Decision>,
    /// Every distinct `inputData` element, deduplicated by name.
    pub input_data: Vec<InputData>,
    /// The diagram.
    pub diagram: Diagram,
}
