//! A physical cargo package and its volume

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::simple_types::{LinearDimension, ValidationError, Weight};

/// Cubic millimeters in one cubic meter, as a power of ten
const CUBIC_METER_EXPONENT: i64 = 9;

/// The three outer dimensions of a package
///
/// Every side was validated when its `LinearDimension` was built, so
/// construction cannot fail.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use fast_delivery::compound_types::PackVolume;
/// use fast_delivery::simple_types::LinearDimension;
/// use rust_decimal::Decimal;
///
/// let side = |name, mm: i64| LinearDimension::create(name, Decimal::from(mm)).unwrap();
/// let volume = PackVolume::new(side("length", 1000), side("width", 500), side("height", 200));
///
/// assert_eq!(volume.width().millimeters(), Decimal::from(500));
/// assert_eq!(volume.cubic_meters(), BigDecimal::from((1, 1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PackVolume {
    length: LinearDimension,
    width: LinearDimension,
    height: LinearDimension,
}

impl PackVolume {
    /// Creates a `PackVolume` from three validated sides
    #[must_use]
    pub const fn new(length: LinearDimension, width: LinearDimension, height: LinearDimension) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Creates a `PackVolume` from raw millimeter values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first negative side, named
    /// `length`, `width` or `height`.
    pub fn create(
        length: Decimal,
        width: Decimal,
        height: Decimal,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            LinearDimension::create("length", length)?,
            LinearDimension::create("width", width)?,
            LinearDimension::create("height", height)?,
        ))
    }

    /// Returns the length
    #[must_use]
    pub const fn length(&self) -> LinearDimension {
        self.length
    }

    /// Returns the width
    #[must_use]
    pub const fn width(&self) -> LinearDimension {
        self.width
    }

    /// Returns the height
    #[must_use]
    pub const fn height(&self) -> LinearDimension {
        self.height
    }

    /// Returns the enclosed volume in cubic meters
    ///
    /// Exact for any sides: the product is taken over the sides' integer
    /// mantissas and the millimeter-to-meter conversion only shifts the scale.
    #[must_use]
    pub fn cubic_meters(&self) -> BigDecimal {
        let sides = [self.length, self.width, self.height].map(|side| side.millimeters());
        let mantissa: BigInt = sides.iter().map(|side| BigInt::from(side.mantissa())).product();
        let scale: i64 = sides.iter().map(|side| i64::from(side.scale())).sum();
        BigDecimal::new(mantissa, scale + CUBIC_METER_EXPONENT)
    }
}

/// One physical cargo item
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use fast_delivery::compound_types::{Pack, PackVolume};
/// use fast_delivery::simple_types::Weight;
/// use num_bigint::BigUint;
/// use rust_decimal::Decimal;
///
/// let volume = PackVolume::create(Decimal::from(100), Decimal::from(100), Decimal::from(100)).unwrap();
/// let pack = Pack::new(Weight::create(&BigDecimal::from(1200)).unwrap(), volume);
///
/// assert_eq!(pack.weight().grams(), &BigUint::from(1200_u32));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pack {
    weight: Weight,
    volume: PackVolume,
}

impl Pack {
    /// Creates a `Pack` from a validated weight and volume
    #[must_use]
    pub const fn new(weight: Weight, volume: PackVolume) -> Self {
        Self { weight, volume }
    }

    /// Returns the weight
    #[must_use]
    pub const fn weight(&self) -> &Weight {
        &self.weight
    }

    /// Returns the volume
    #[must_use]
    pub const fn volume(&self) -> PackVolume {
        self.volume
    }
}
