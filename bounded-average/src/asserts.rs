#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const BOUNDED_AVERAGE_ASSERT_LEVEL_DEFINITION: u8 = BOUNDED_AVERAGE_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const BOUNDED_AVERAGE_ASSERT_LEVEL_DEFINITION: u8 = BOUNDED_AVERAGE_ASSERT_ADVANCED;

pub const BOUNDED_AVERAGE_ASSERT_SIMPLE: u8 = 1;
pub const BOUNDED_AVERAGE_ASSERT_MODERATE: u8 = 2;
pub const BOUNDED_AVERAGE_ASSERT_ADVANCED: u8 = 3;

/// Checks that are cheap enough to always run.
#[macro_export]
#[doc(hidden)]
macro_rules! bounded_average_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::BOUNDED_AVERAGE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BOUNDED_AVERAGE_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! bounded_average_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::BOUNDED_AVERAGE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BOUNDED_AVERAGE_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

/// Checks which are linear in the size of the window; only enabled in tests and with the
/// `debug-checks` feature.
#[macro_export]
#[doc(hidden)]
macro_rules! bounded_average_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::BOUNDED_AVERAGE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BOUNDED_AVERAGE_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
