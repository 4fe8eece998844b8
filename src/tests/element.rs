use crate::{ELEMENT_COUNT, Element, ElementError};

#[test]
fn numbers_and_slots() {
    assert_eq!(Element::H.number(), 1);
    assert_eq!(Element::O.number(), 8);
    assert_eq!(Element::Al.number(), 13);
    assert_eq!(Element::Og.number(), 118);
    assert_eq!(Element::H.slot(), 0);
    assert_eq!(Element::Og.slot(), ELEMENT_COUNT - 1);
}

#[test]
fn table_is_in_atomic_number_order() {
    for (slot, element) in Element::ALL.iter().enumerate() {
        assert_eq!(element.slot(), slot, "{element} out of place");
        assert_eq!(Element::from_slot(slot), *element);
    }
}

#[test]
fn symbols_and_names() {
    assert_eq!(Element::Al.symbol(), "Al");
    assert_eq!(Element::Al.name(), "Aluminum");
    assert_eq!(Element::W.symbol(), "W");
    assert_eq!(Element::W.name(), "Tungsten");
    assert_eq!(Element::Og.name(), "Oganesson");
    assert_eq!(Element::Fe.to_string(), "Fe");
}

#[test]
fn from_number() {
    assert_eq!(Element::from_number(26), Ok(Element::Fe));
    assert_eq!(Element::try_from(118_u8), Ok(Element::Og));
    assert_eq!(u8::from(Element::U), 92);
}

#[test]
fn from_number_out_of_range() {
    assert_eq!(Element::from_number(0), Err(ElementError::UnknownNumber(0)));
    assert_eq!(
        Element::from_number(119),
        Err(ElementError::UnknownNumber(119))
    );
    assert_eq!(
        ElementError::UnknownNumber(0).to_string(),
        "no element with atomic number 0"
    );
}

#[test]
fn parse_symbol() {
    assert_eq!("Cl".parse::<Element>(), Ok(Element::Cl));
    assert_eq!("Og".parse::<Element>(), Ok(Element::Og));
    assert_eq!(
        "cl".parse::<Element>(),
        Err(ElementError::UnknownSymbol("cl".to_owned()))
    );
    assert!("".parse::<Element>().is_err());
}

#[test]
fn symbols_round_trip_through_parse() {
    for element in Element::ALL {
        assert_eq!(element.symbol().parse::<Element>(), Ok(element));
    }
}
