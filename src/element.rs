//! The fixed alphabet of trie keys: the 118 chemical elements.
//!
//! [`Element`] is a closed enum whose discriminant is the atomic number, so
//! an out-of-range symbol cannot reach the trie. Raw numbers and symbol
//! strings are converted with [`Element::from_number`] and [`str::parse`],
//! both of which report [`ElementError`] on failure.

use std::fmt;
use std::str::FromStr;

use crate::error::ElementError;

/// Number of elements in the alphabet (and child slots per trie node).
pub const ELEMENT_COUNT: usize = 118;

/// A chemical element, identified by its atomic number (1..=118).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Element {
    /// Hydrogen.
    H = 1,
    /// Helium.
    He,
    /// Lithium.
    Li,
    /// Beryllium.
    Be,
    /// Boron.
    B,
    /// Carbon.
    C,
    /// Nitrogen.
    N,
    /// Oxygen.
    O,
    /// Fluorine.
    F,
    /// Neon.
    Ne,
    /// Sodium.
    Na,
    /// Magnesium.
    Mg,
    /// Aluminum.
    Al,
    /// Silicon.
    Si,
    /// Phosphorus.
    P,
    /// Sulfur.
    S,
    /// Chlorine.
    Cl,
    /// Argon.
    Ar,
    /// Potassium.
    K,
    /// Calcium.
    Ca,
    /// Scandium.
    Sc,
    /// Titanium.
    Ti,
    /// Vanadium.
    V,
    /// Chromium.
    Cr,
    /// Manganese.
    Mn,
    /// Iron.
    Fe,
    /// Cobalt.
    Co,
    /// Nickel.
    Ni,
    /// Copper.
    Cu,
    /// Zinc.
    Zn,
    /// Gallium.
    Ga,
    /// Germanium.
    Ge,
    /// Arsenic.
    As,
    /// Selenium.
    Se,
    /// Bromine.
    Br,
    /// Krypton.
    Kr,
    /// Rubidium.
    Rb,
    /// Strontium.
    Sr,
    /// Yttrium.
    Y,
    /// Zirconium.
    Zr,
    /// Niobium.
    Nb,
    /// Molybdenum.
    Mo,
    /// Technetium.
    Tc,
    /// Ruthenium.
    Ru,
    /// Rhodium.
    Rh,
    /// Palladium.
    Pd,
    /// Silver.
    Ag,
    /// Cadmium.
    Cd,
    /// Indium.
    In,
    /// Tin.
    Sn,
    /// Antimony.
    Sb,
    /// Tellurium.
    Te,
    /// Iodine.
    I,
    /// Xenon.
    Xe,
    /// Cesium.
    Cs,
    /// Barium.
    Ba,
    /// Lanthanum.
    La,
    /// Cerium.
    Ce,
    /// Praseodymium.
    Pr,
    /// Neodymium.
    Nd,
    /// Promethium.
    Pm,
    /// Samarium.
    Sm,
    /// Europium.
    Eu,
    /// Gadolinium.
    Gd,
    /// Terbium.
    Tb,
    /// Dysprosium.
    Dy,
    /// Holmium.
    Ho,
    /// Erbium.
    Er,
    /// Thulium.
    Tm,
    /// Ytterbium.
    Yb,
    /// Lutetium.
    Lu,
    /// Hafnium.
    Hf,
    /// Tantalum.
    Ta,
    /// Tungsten.
    W,
    /// Rhenium.
    Re,
    /// Osmium.
    Os,
    /// Iridium.
    Ir,
    /// Platinum.
    Pt,
    /// Gold.
    Au,
    /// Mercury.
    Hg,
    /// Thallium.
    Tl,
    /// Lead.
    Pb,
    /// Bismuth.
    Bi,
    /// Polonium.
    Po,
    /// Astatine.
    At,
    /// Radon.
    Rn,
    /// Francium.
    Fr,
    /// Radium.
    Ra,
    /// Actinium.
    Ac,
    /// Thorium.
    Th,
    /// Protactinium.
    Pa,
    /// Uranium.
    U,
    /// Neptunium.
    Np,
    /// Plutonium.
    Pu,
    /// Americium.
    Am,
    /// Curium.
    Cm,
    /// Berkelium.
    Bk,
    /// Californium.
    Cf,
    /// Einsteinium.
    Es,
    /// Fermium.
    Fm,
    /// Mendelevium.
    Md,
    /// Nobelium.
    No,
    /// Lawrencium.
    Lr,
    /// Rutherfordium.
    Rf,
    /// Dubnium.
    Db,
    /// Seaborgium.
    Sg,
    /// Bohrium.
    Bh,
    /// Hassium.
    Hs,
    /// Meitnerium.
    Mt,
    /// Darmstadtium.
    Ds,
    /// Roentgenium.
    Rg,
    /// Copernicium.
    Cn,
    /// Nihonium.
    Nh,
    /// Flerovium.
    Fl,
    /// Moscovium.
    Mc,
    /// Livermorium.
    Lv,
    /// Tennessine.
    Ts,
    /// Oganesson.
    Og,
}

/// Every element in atomic-number order; `ALL[e.slot()] == e`.
const ALL: [Element; ELEMENT_COUNT] = [
    Element::H, Element::He, Element::Li, Element::Be, Element::B, Element::C, Element::N,
    Element::O, Element::F, Element::Ne, Element::Na, Element::Mg, Element::Al, Element::Si,
    Element::P, Element::S, Element::Cl, Element::Ar, Element::K, Element::Ca, Element::Sc,
    Element::Ti, Element::V, Element::Cr, Element::Mn, Element::Fe, Element::Co, Element::Ni,
    Element::Cu, Element::Zn, Element::Ga, Element::Ge, Element::As, Element::Se, Element::Br,
    Element::Kr, Element::Rb, Element::Sr, Element::Y, Element::Zr, Element::Nb, Element::Mo,
    Element::Tc, Element::Ru, Element::Rh, Element::Pd, Element::Ag, Element::Cd, Element::In,
    Element::Sn, Element::Sb, Element::Te, Element::I, Element::Xe, Element::Cs, Element::Ba,
    Element::La, Element::Ce, Element::Pr, Element::Nd, Element::Pm, Element::Sm, Element::Eu,
    Element::Gd, Element::Tb, Element::Dy, Element::Ho, Element::Er, Element::Tm, Element::Yb,
    Element::Lu, Element::Hf, Element::Ta, Element::W, Element::Re, Element::Os, Element::Ir,
    Element::Pt, Element::Au, Element::Hg, Element::Tl, Element::Pb, Element::Bi, Element::Po,
    Element::At, Element::Rn, Element::Fr, Element::Ra, Element::Ac, Element::Th, Element::Pa,
    Element::U, Element::Np, Element::Pu, Element::Am, Element::Cm, Element::Bk, Element::Cf,
    Element::Es, Element::Fm, Element::Md, Element::No, Element::Lr, Element::Rf, Element::Db,
    Element::Sg, Element::Bh, Element::Hs, Element::Mt, Element::Ds, Element::Rg, Element::Cn,
    Element::Nh, Element::Fl, Element::Mc, Element::Lv, Element::Ts, Element::Og,
];

const SYMBOLS: [&str; ELEMENT_COUNT] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

const NAMES: [&str; ELEMENT_COUNT] = [
    "Hydrogen", "Helium", "Lithium", "Beryllium", "Boron", "Carbon", "Nitrogen", "Oxygen",
    "Fluorine", "Neon", "Sodium", "Magnesium", "Aluminum", "Silicon", "Phosphorus", "Sulfur",
    "Chlorine", "Argon", "Potassium", "Calcium", "Scandium", "Titanium", "Vanadium", "Chromium",
    "Manganese", "Iron", "Cobalt", "Nickel", "Copper", "Zinc", "Gallium", "Germanium", "Arsenic",
    "Selenium", "Bromine", "Krypton", "Rubidium", "Strontium", "Yttrium", "Zirconium", "Niobium",
    "Molybdenum", "Technetium", "Ruthenium", "Rhodium", "Palladium", "Silver", "Cadmium",
    "Indium", "Tin", "Antimony", "Tellurium", "Iodine", "Xenon", "Cesium", "Barium", "Lanthanum",
    "Cerium", "Praseodymium", "Neodymium", "Promethium", "Samarium", "Europium", "Gadolinium",
    "Terbium", "Dysprosium", "Holmium", "Erbium", "Thulium", "Ytterbium", "Lutetium", "Hafnium",
    "Tantalum", "Tungsten", "Rhenium", "Osmium", "Iridium", "Platinum", "Gold", "Mercury",
    "Thallium", "Lead", "Bismuth", "Polonium", "Astatine", "Radon", "Francium", "Radium",
    "Actinium", "Thorium", "Protactinium", "Uranium", "Neptunium", "Plutonium", "Americium",
    "Curium", "Berkelium", "Californium", "Einsteinium", "Fermium", "Mendelevium", "Nobelium",
    "Lawrencium", "Rutherfordium", "Dubnium", "Seaborgium", "Bohrium", "Hassium", "Meitnerium",
    "Darmstadtium", "Roentgenium", "Copernicium", "Nihonium", "Flerovium", "Moscovium",
    "Livermorium", "Tennessine", "Oganesson",
];

impl Element {
    /// Every element in ascending atomic-number order.
    pub const ALL: [Self; ELEMENT_COUNT] = ALL;

    /// Returns the atomic number (1..=118).
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based child slot used by trie nodes (`number - 1`).
    #[inline]
    #[must_use]
    pub const fn slot(self) -> usize {
        self as usize - 1
    }

    /// Returns the chemical symbol, e.g. `"Al"`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        SYMBOLS[self.slot()]
    }

    /// Returns the English element name, e.g. `"Aluminum"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self.slot()]
    }

    /// Looks up an element by atomic number.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::UnknownNumber`] if `number` is not in 1..=118.
    pub fn from_number(number: u8) -> Result<Self, ElementError> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|slot| ALL.get(slot).copied())
            .ok_or(ElementError::UnknownNumber(number))
    }

    /// Looks up an element by zero-based trie slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= ELEMENT_COUNT`. Slots come from trie bitmaps, which
    /// only ever hold valid positions.
    #[must_use]
    pub const fn from_slot(slot: usize) -> Self {
        ALL[slot]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SYMBOLS
            .iter()
            .position(|symbol| *symbol == s)
            .map(Self::from_slot)
            .ok_or_else(|| ElementError::UnknownSymbol(s.to_owned()))
    }
}

impl TryFrom<u8> for Element {
    type Error = ElementError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number)
    }
}

impl From<Element> for u8 {
    fn from(element: Element) -> Self {
        element.number()
    }
}
