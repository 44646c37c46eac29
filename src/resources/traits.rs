//! Capability markers that resources embed. They carry no state of their
//! own and are skipped by the type mapping and the safety check.

use crate::domain::model::RecordShape;

pub fn base() -> RecordShape {
    RecordShape::trait_marker("Base")
}

pub fn groupable() -> RecordShape {
    RecordShape::trait_marker("Groupable")
}

pub fn refreshable() -> RecordShape {
    RecordShape::trait_marker("Refreshable")
}

pub fn sendable() -> RecordShape {
    RecordShape::trait_marker("Sendable")
}

pub fn recvable() -> RecordShape {
    RecordShape::trait_marker("Recvable")
}
