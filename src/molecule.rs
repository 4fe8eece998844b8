//! Molecule records: an element sequence plus thermodynamic data.
//!
//! The trie treats these as opaque payloads. [`Information`] is a plain
//! record of four optional per-state blocks, filled with the chained
//! `with_*` constructors or by field assignment.

use crate::element::Element;

/// State of matter a [`Properties`] block applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    /// Solid.
    Solid,
    /// Liquid.
    Liquid,
    /// Gas.
    Gas,
    /// Aqueous solution.
    Aqueous,
}

impl State {
    /// All states, in the order they are reported.
    pub const ALL: [Self; 4] = [Self::Solid, Self::Liquid, Self::Gas, Self::Aqueous];
}

/// Thermodynamic properties of one state of matter.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Properties {
    /// Standard enthalpy of formation, kJ/mol.
    pub enthalpy: Option<f64>,
    /// Standard molar entropy, J/(K·mol).
    pub entropy: Option<f64>,
    /// Common name in this state (e.g. "steam").
    pub other_name: Option<String>,
}

impl Properties {
    /// Creates a block with both enthalpy and entropy known.
    #[must_use]
    pub const fn new(enthalpy: f64, entropy: f64) -> Self {
        Self {
            enthalpy: Some(enthalpy),
            entropy: Some(entropy),
            other_name: None,
        }
    }

    /// Sets the common name for this state.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.other_name = Some(name.into());
        self
    }
}

/// Per-state thermodynamic data of a molecule.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Information {
    /// Solid-state properties.
    pub solid: Option<Properties>,
    /// Liquid-state properties.
    pub liquid: Option<Properties>,
    /// Gas-phase properties.
    pub gas: Option<Properties>,
    /// Aqueous-solution properties.
    pub aqueous: Option<Properties>,
}

impl Information {
    /// Sets the solid-state block.
    #[must_use]
    pub fn with_solid(mut self, properties: Properties) -> Self {
        self.solid = Some(properties);
        self
    }

    /// Sets the liquid-state block.
    #[must_use]
    pub fn with_liquid(mut self, properties: Properties) -> Self {
        self.liquid = Some(properties);
        self
    }

    /// Sets the gas-phase block.
    #[must_use]
    pub fn with_gas(mut self, properties: Properties) -> Self {
        self.gas = Some(properties);
        self
    }

    /// Sets the aqueous block.
    #[must_use]
    pub fn with_aqueous(mut self, properties: Properties) -> Self {
        self.aqueous = Some(properties);
        self
    }

    /// Returns the block for `state`, if known.
    #[must_use]
    pub const fn get(&self, state: State) -> Option<&Properties> {
        match state {
            State::Solid => self.solid.as_ref(),
            State::Liquid => self.liquid.as_ref(),
            State::Gas => self.gas.as_ref(),
            State::Aqueous => self.aqueous.as_ref(),
        }
    }

    /// Iterates the known blocks in [`State::ALL`] order.
    pub fn known(&self) -> impl Iterator<Item = (State, &Properties)> {
        State::ALL
            .into_iter()
            .filter_map(|state| self.get(state).map(|p| (state, p)))
    }
}

/// A compound: its element sequence and thermodynamic data.
///
/// `elements` lists atoms in formula order with repetition, e.g. Al₂O₃ is
/// `[Al, Al, O, O, O]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Molecule {
    /// Atoms in formula order.
    pub elements: Vec<Element>,
    /// Per-state thermodynamic data.
    pub information: Information,
}

impl Molecule {
    /// Creates a molecule record.
    #[must_use]
    pub fn new(elements: impl Into<Vec<Element>>, information: Information) -> Self {
        Self {
            elements: elements.into(),
            information,
        }
    }

    /// Elemental aluminum.
    #[must_use]
    pub fn aluminum() -> Self {
        Self::new(
            [Element::Al],
            Information::default()
                .with_solid(Properties::new(0.0, 28.3))
                .with_gas(Properties::new(324.4, 164.54)),
        )
    }

    /// Aluminum oxide, Al₂O₃.
    #[must_use]
    pub fn alumina() -> Self {
        Self::new(
            [Element::Al, Element::Al, Element::O, Element::O, Element::O],
            Information::default().with_solid(Properties::new(-1676.0, 50.92)),
        )
    }

    /// Water, H₂O, with its liquid and steam data.
    #[must_use]
    pub fn water() -> Self {
        Self::new(
            [Element::H, Element::H, Element::O],
            Information::default()
                .with_liquid(Properties::new(-285.83, 70.0).named("water"))
                .with_gas(Properties::new(-241.82, 188.8).named("steam")),
        )
    }
}
