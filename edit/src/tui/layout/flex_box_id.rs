// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Display},
          ops::Deref};

use serde::{Deserialize, Serialize};

/// Identifies a box in the layout, and the component that renders inside it.
/// Apps typically define an enum of well known ids (represented in memory as
/// [u8]s) and convert it into this type.
#[derive(Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct FlexBoxId(pub u8);

impl From<FlexBoxId> for u8 {
    fn from(id: FlexBoxId) -> Self { id.0 }
}

impl From<u8> for FlexBoxId {
    fn from(id: u8) -> Self { Self(id) }
}

impl Deref for FlexBoxId {
    type Target = u8;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl FlexBoxId {
    fn pretty_print(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "🔑┆id: {}┆", self.0)
    }
}

impl Debug for FlexBoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.pretty_print(f)
    }
}

impl Display for FlexBoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.pretty_print(f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_flex_box_id_default() {
        let id = FlexBoxId::default();
        assert_eq!(id.0, 0);
    }

    #[test]
    fn test_flex_box_id_from_u8() {
        let id = FlexBoxId::from(42u8);
        assert_eq!(id.0, 42);
        let value: u8 = id.into();
        assert_eq!(value, 42);
    }
}
