//! secp256k1 elliptic curve point operations
//!
//! Public points are affine. Arithmetic runs on homogeneous projective
//! coordinates (X:Y:Z), x = X/Z, y = Y/Z, using the complete formulas of
//! Renes, Costello and Batina (ePrint 2015/1060, algorithms 7 and 9 with
//! a = 0). They have no exceptional cases, so the identity, P + P and
//! P + (−P) take the same path as every other input.

use crate::ec::k256::{
    constants::{
        CURVE_B, CURVE_B3, GENERATOR_X, GENERATOR_Y, K256_FIELD_ELEMENT_SIZE,
        K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE, K256_WINDOWS,
        K256_WINDOW_ENTRIES,
    },
    field::FieldElement,
    scalar::Scalar,
    table,
};
use crate::error::{validate, Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Format of a serialized elliptic curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// The point at infinity, encoded as all zero bytes
    Identity,
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
    /// Compressed format: 0x02/0x03 || x
    Compressed,
}

/// A point on the secp256k1 curve in affine coordinates
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_identity = self.is_identity & other.is_identity;
        let neither = !self.is_identity & !other.is_identity;
        both_identity | (neither & self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Point {}

impl ConditionallySelectable for Point {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Point {
            is_identity: Choice::conditional_select(&a.is_identity, &b.is_identity, choice),
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Point {
    /// The identity point (point at infinity).
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// The standard base point G.
    pub fn generator() -> Self {
        Point {
            is_identity: Choice::from(0),
            x: FieldElement(GENERATOR_X),
            y: FieldElement(GENERATOR_Y),
        }
    }

    /// Build a point from affine coordinates, checking the curve equation.
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<Self> {
        validate::on_curve(bool::from(Self::is_on_curve(&x, &y)), "K256 affine point")?;
        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// Create a point from big-endian coordinates.
    ///
    /// Coordinates ≥ p or off the curve are rejected with `PointNotOnCurve`.
    pub fn new_uncompressed(
        x: &[u8; K256_FIELD_ELEMENT_SIZE],
        y: &[u8; K256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let context = "K256 uncompressed point";
        let x_fe = FieldElement::from_bytes(x).map_err(|_| Error::PointNotOnCurve { context })?;
        let y_fe = FieldElement::from_bytes(y).map_err(|_| Error::PointNotOnCurve { context })?;
        Self::from_affine(x_fe, y_fe)
    }

    /// Find the point with x-coordinate `x` whose y has parity `y_odd`.
    ///
    /// Fails with `PointNotOnCurve` when x³ + 7 has no square root.
    pub fn from_x_coordinate(x: &FieldElement, y_odd: Choice) -> Result<Self> {
        let rhs = x.square().mul(x).add(&FieldElement::from_u32(CURVE_B));
        let root = rhs.sqrt().ok_or(Error::PointNotOnCurve {
            context: "K256 x-coordinate",
        })?;
        let flip = root.is_odd() ^ y_odd;
        let y = FieldElement::conditional_select(&root, &root.negate(), flip);
        Ok(Point {
            is_identity: Choice::from(0),
            x: *x,
            y,
        })
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Check if this point is the identity or lies on the curve.
    pub fn is_valid(&self) -> bool {
        bool::from(self.is_identity | Self::is_on_curve(&self.x, &self.y))
    }

    /// Big-endian affine x
    pub fn x_coordinate_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Big-endian affine y
    pub fn y_coordinate_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Affine x as a field element (zero for the identity)
    pub fn x_field(&self) -> FieldElement {
        self.x
    }

    /// Parity of the affine y-coordinate
    pub fn y_is_odd(&self) -> Choice {
        self.y.is_odd()
    }

    /// Classify an encoding by its length and prefix byte.
    pub fn detect_format(bytes: &[u8]) -> Result<PointFormat> {
        match bytes.len() {
            K256_POINT_COMPRESSED_SIZE | K256_POINT_UNCOMPRESSED_SIZE
                if bytes.iter().all(|&b| b == 0) =>
            {
                Ok(PointFormat::Identity)
            }
            K256_POINT_COMPRESSED_SIZE => match bytes[0] {
                0x02 | 0x03 => Ok(PointFormat::Compressed),
                _ => Err(Error::param("K256 Point", "Invalid compressed point prefix")),
            },
            K256_POINT_UNCOMPRESSED_SIZE => match bytes[0] {
                0x04 => Ok(PointFormat::Uncompressed),
                _ => Err(Error::param(
                    "K256 Point",
                    "Invalid uncompressed point prefix (expected 0x04)",
                )),
            },
            actual => Err(Error::Length {
                context: "K256 Point",
                expected: K256_POINT_COMPRESSED_SIZE,
                actual,
            }),
        }
    }

    /// Decode either SEC1 form, or the all-zero identity encoding.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        match Self::detect_format(bytes)? {
            PointFormat::Identity => Ok(Self::identity()),
            PointFormat::Compressed => Self::deserialize_compressed(bytes),
            PointFormat::Uncompressed => Self::deserialize_uncompressed(bytes),
        }
    }

    /// Serialize as 0x04 || x || y. The identity encodes as 65 zero bytes.
    pub fn serialize_uncompressed(&self) -> [u8; K256_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; K256_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = 0x04;
        out[1..33].copy_from_slice(&self.x.to_bytes());
        out[33..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Deserialize a point from uncompressed format.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "K256 Uncompressed Point",
            bytes.len(),
            K256_POINT_UNCOMPRESSED_SIZE,
        )?;

        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }

        if bytes[0] != 0x04 {
            return Err(Error::param(
                "K256 Point",
                "Invalid uncompressed point prefix (expected 0x04)",
            ));
        }

        let mut x_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        let mut y_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..33]);
        y_bytes.copy_from_slice(&bytes[33..65]);

        Self::new_uncompressed(&x_bytes, &y_bytes)
    }

    /// Serialize as 0x02/0x03 || x. The identity encodes as 33 zero bytes.
    pub fn serialize_compressed(&self) -> [u8; K256_POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; K256_POINT_COMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = 0x02 | self.y.is_odd().unwrap_u8();
        out[1..].copy_from_slice(&self.x.to_bytes());
        out
    }

    /// Deserialize a point from compressed format.
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "K256 Compressed Point",
            bytes.len(),
            K256_POINT_COMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let tag = bytes[0];
        if tag != 0x02 && tag != 0x03 {
            return Err(Error::param("K256 Point", "Invalid compressed point prefix"));
        }
        let mut x_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..]);
        let x_fe = FieldElement::from_bytes(&x_bytes).map_err(|_| Error::PointNotOnCurve {
            context: "K256 compressed point",
        })?;
        Self::from_x_coordinate(&x_fe, Choice::from(tag & 1))
    }

    /// Add two points using the group law.
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// Double a point.
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// The inverse point (x, −y).
    pub fn negate(&self) -> Self {
        Point {
            is_identity: self.is_identity,
            x: self.x,
            y: self.y.negate(),
        }
    }

    /// Scalar multiplication: compute scalar * self.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        self.to_projective().mul(scalar).to_affine()
    }

    fn is_on_curve(x: &FieldElement, y: &FieldElement) -> Choice {
        let lhs = y.square();
        let rhs = x.square().mul(x).add(&FieldElement::from_u32(CURVE_B));
        lhs.ct_eq(&rhs)
    }

    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        let affine = ProjectivePoint {
            x: self.x,
            y: self.y,
            z: FieldElement::one(),
        };
        ProjectivePoint::conditional_select(&affine, &ProjectivePoint::identity(), self.is_identity)
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ProjectivePoint {
    /// (0 : 1 : 0)
    pub(crate) fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// Complete addition, 12M + 2m(b3)
    pub(crate) fn add(&self, other: &Self) -> Self {
        let x1x2 = self.x.mul(&other.x);
        let y1y2 = self.y.mul(&other.y);
        let z1z2 = self.z.mul(&other.z);

        // X1·Y2 + X2·Y1
        let c = self
            .x
            .add(&self.y)
            .mul(&other.x.add(&other.y))
            .sub(&x1x2.add(&y1y2));
        // Y1·Z2 + Y2·Z1
        let d = self
            .y
            .add(&self.z)
            .mul(&other.y.add(&other.z))
            .sub(&y1y2.add(&z1z2));
        // X1·Z2 + X2·Z1
        let e = self
            .x
            .add(&self.z)
            .mul(&other.x.add(&other.z))
            .sub(&x1x2.add(&z1z2));

        let f = x1x2.double().add(&x1x2);
        let g = z1z2.mul_small(CURVE_B3);
        let h = y1y2.add(&g);
        let i = y1y2.sub(&g);
        let j = e.mul_small(CURVE_B3);

        ProjectivePoint {
            x: c.mul(&i).sub(&d.mul(&j)),
            y: j.mul(&f).add(&i.mul(&h)),
            z: h.mul(&d).add(&f.mul(&c)),
        }
    }

    /// Complete doubling
    pub(crate) fn double(&self) -> Self {
        let yy = self.y.square();
        let yy8 = yy.double().double().double();
        let c = self.z.square().mul_small(CURVE_B3);
        let d = yy.sub(&c.double().add(&c));

        ProjectivePoint {
            x: d.mul(&self.x).mul(&self.y).double(),
            y: d.mul(&yy.add(&c)).add(&c.mul(&yy8)),
            z: self.y.mul(&self.z).mul(&yy8),
        }
    }

    /// 4-bit fixed-window multiplication over all 64 nibbles.
    ///
    /// Every window costs four doublings and one addition of an entry
    /// read by a full constant-time table scan.
    pub(crate) fn mul(&self, scalar: &Scalar) -> Self {
        let mut window = [ProjectivePoint::identity(); K256_WINDOW_ENTRIES];
        window[1] = *self;
        for j in 2..K256_WINDOW_ENTRIES {
            window[j] = window[j - 1].add(self);
        }

        let mut acc = ProjectivePoint::identity();
        for i in (0..K256_WINDOWS).rev() {
            acc = acc.double().double().double().double();
            acc = acc.add(&table::select_entry(&window, scalar.nibble(i)));
        }
        acc
    }

    pub(crate) fn to_affine(&self) -> Point {
        // Z = 0 only for the identity, where the inverse below is also 0
        let z_inv = self.z.pow_p_minus_2();
        Point {
            is_identity: self.z.is_zero(),
            x: self.x.mul(&z_inv),
            y: self.y.mul(&z_inv),
        }
    }
}
