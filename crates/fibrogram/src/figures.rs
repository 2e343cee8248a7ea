//! The built-in pathway figures.
//!
//! Each figure is a hand-authored constant graph: node positions were tuned
//! by eye in a y-up coordinate space, and edges carry their declared
//! style/color attributes. Building a figure is pure construction — the same
//! call always yields the same pathway.

use std::{fmt, str::FromStr};

use crate::{error::FibrogramError, semantic::Pathway};

mod cascade;
mod pathogenesis;

/// Identifies one of the built-in figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    /// The pulmonary fibrosis pathogenesis interaction web (21 nodes, with
    /// the CD47/QPCTL axis drawn as orange stars).
    Pathogenesis,
    /// The QPCTL-inhibitor effect cascade (8-node chain).
    Cascade,
}

impl Figure {
    /// All built-in figures, in presentation order.
    pub const fn all() -> [Figure; 2] {
        [Figure::Pathogenesis, Figure::Cascade]
    }

    /// The canonical CLI name of this figure.
    pub fn name(&self) -> &'static str {
        match self {
            Figure::Pathogenesis => "pathogenesis",
            Figure::Cascade => "cascade",
        }
    }

    /// Build this figure's pathway.
    pub fn build(&self) -> Pathway {
        match self {
            Figure::Pathogenesis => pathogenesis::build(),
            Figure::Cascade => cascade::build(),
        }
    }
}

impl FromStr for Figure {
    type Err = FibrogramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pathogenesis" | "figure1" => Ok(Figure::Pathogenesis),
            "cascade" | "figure2" => Ok(Figure::Cascade),
            other => Err(FibrogramError::UnknownFigure(other.to_string())),
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_from_str() {
        assert_eq!(Figure::from_str("pathogenesis").unwrap(), Figure::Pathogenesis);
        assert_eq!(Figure::from_str("figure1").unwrap(), Figure::Pathogenesis);
        assert_eq!(Figure::from_str("cascade").unwrap(), Figure::Cascade);
        assert_eq!(Figure::from_str("figure2").unwrap(), Figure::Cascade);
    }

    #[test]
    fn test_figure_from_str_unknown() {
        let err = Figure::from_str("figure3").unwrap_err();
        assert!(err.to_string().contains("unknown figure `figure3`"));
    }

    #[test]
    fn test_figure_names_roundtrip() {
        for figure in Figure::all() {
            assert_eq!(Figure::from_str(figure.name()).unwrap(), figure);
        }
    }
}
