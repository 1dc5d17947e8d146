//! Concrete output dialect (spec §6.2). The algorithm above this module
//! never depends on XML directly — [`xml::render`] is the one place a
//! [`crate::model::DmnDocument`] becomes bytes.

pub mod xml;
