//! Macros for the scalar operator families.

/// Implements `*` and `/` between quantities and each listed primitive scalar, in both operand orders, plus
/// `*=` and `/=` with the scalar on the right.
///
/// A scalar operand never changes the dimension, except on the left of `/` where the result takes the inverse
/// dimension (`3 / second` is `3 s^-1`).
macro_rules! impl_scalar_ops {
    ($($scalar:ty),+ $(,)?) => {
        $(
            impl<V: ::core::ops::Mul<$scalar>> ::core::ops::Mul<$scalar> for $crate::Quantity<V> {
                type Output = $crate::Quantity<V::Output>;
                #[inline]
                fn mul(self, rhs: $scalar) -> Self::Output {
                    let (value, dimension) = self.into_parts();
                    $crate::Quantity::new(value * rhs, dimension)
                }
            }

            impl<V: ::core::ops::Div<$scalar>> ::core::ops::Div<$scalar> for $crate::Quantity<V> {
                type Output = $crate::Quantity<V::Output>;
                #[inline]
                fn div(self, rhs: $scalar) -> Self::Output {
                    let (value, dimension) = self.into_parts();
                    $crate::Quantity::new(value / rhs, dimension)
                }
            }

            impl<V: ::core::ops::MulAssign<$scalar>> ::core::ops::MulAssign<$scalar> for $crate::Quantity<V> {
                #[inline]
                fn mul_assign(&mut self, rhs: $scalar) {
                    *self.value_mut() *= rhs;
                }
            }

            impl<V: ::core::ops::DivAssign<$scalar>> ::core::ops::DivAssign<$scalar> for $crate::Quantity<V> {
                #[inline]
                fn div_assign(&mut self, rhs: $scalar) {
                    *self.value_mut() /= rhs;
                }
            }

            impl<V> ::core::ops::Mul<$crate::Quantity<V>> for $scalar
            where
                $scalar: ::core::ops::Mul<V>,
            {
                type Output = $crate::Quantity<<$scalar as ::core::ops::Mul<V>>::Output>;
                #[inline]
                fn mul(self, rhs: $crate::Quantity<V>) -> Self::Output {
                    let (value, dimension) = rhs.into_parts();
                    $crate::Quantity::new(self * value, dimension)
                }
            }

            impl<V> ::core::ops::Div<$crate::Quantity<V>> for $scalar
            where
                $scalar: ::core::ops::Div<V>,
            {
                type Output = $crate::Quantity<<$scalar as ::core::ops::Div<V>>::Output>;
                #[inline]
                fn div(self, rhs: $crate::Quantity<V>) -> Self::Output {
                    let (value, dimension) = rhs.into_parts();
                    $crate::Quantity::new(self / value, dimension.inverse())
                }
            }
        )+
    };
}
