/// Declares an [`Observer`](crate::Observer) for the associated function
/// `Self::$name`, watching the listed fields.
///
/// Must be used inside the record's `impl Observed` block. A name without the
/// `observe_` prefix is rejected at compile time.
///
/// ```ignore
/// const OBSERVERS: &'static [Observer<Self>] = &[
/// 	observer!(observe_total => "price_net", "price_tax"),
/// ];
/// ```
#[macro_export]
macro_rules! observer {
    ($name:ident => $($field:literal),* $(,)?) => {{
        const _: () = ::core::assert!(
            $crate::has_observe_prefix(::core::stringify!($name)),
            ::core::concat!(
                "observer `",
                ::core::stringify!($name),
                "` must be named with the `observe_` prefix"
            )
        );
        $crate::Observer::new(::core::stringify!($name), &[$($field),*], Self::$name)
    }};
    ($name:ident) => {
        $crate::observer!($name =>)
    };
}

/// Builds a [`Field`](crate::Field) handle for `$ty::$name`.
#[macro_export]
macro_rules! field {
    ($ty:ty, $name:ident : $value:ty) => {
        $crate::Field::<$ty, $value>::new(::core::stringify!($name), |record| &mut record.$name)
    };
}
