use num_bigint::BigUint;

/// A finite abelian group described by a parameter object.
///
/// The implementor owns the domain parameters (curve equation, field); the
/// elements are plain values that only make sense together with it. Both the
/// elliptic-curve point group and the hyperelliptic divisor class group
/// implement this trait.
pub trait Group {
    type Element: Clone;

    fn identity(&self) -> Self::Element;
    fn is_identity(&self, element: &Self::Element) -> bool;
    fn combine(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn double(&self, element: &Self::Element) -> Self::Element;
    fn negate(&self, element: &Self::Element) -> Self::Element;

    /// Double-and-add over the bits of `scalar`, least-significant first.
    ///
    /// The branch on each bit is data dependent and therefore not constant time.
    fn scalar_mul(&self, element: &Self::Element, scalar: &BigUint) -> Self::Element {
        let mut result = self.identity();
        let mut temp = element.clone();
        let bits = scalar.bits();

        for i in 0..bits {
            if scalar.bit(i) {
                result = self.combine(&result, &temp);
            }
            if i + 1 < bits {
                temp = self.double(&temp);
            }
        }

        result
    }

    fn mul_u64(&self, element: &Self::Element, n: u64) -> Self::Element {
        self.scalar_mul(element, &BigUint::from(n))
    }

    fn multi_scalar_mul(&self, elements: &[Self::Element], scalars: &[BigUint]) -> Self::Element {
        assert_eq!(
            elements.len(),
            scalars.len(),
            "Elements and scalars must have same length"
        );

        let mut result = self.identity();
        for (element, scalar) in elements.iter().zip(scalars.iter()) {
            result = self.combine(&result, &self.scalar_mul(element, scalar));
        }
        result
    }
}
