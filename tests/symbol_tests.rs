//! # Symbol Tests
//!
//! Exported entry points against the JNI mangling rules.

use particle_native::jni::bridge::{
    Java_net_kaedenn_debugtoy_SurfaceAnimation_animateNative,
    Java_net_kaedenn_debugtoy_SurfaceAnimation_funcNative,
};
use particle_native::jni::symbol::{mangle_long_name, mangle_short_name, NATIVE_METHODS};
use particle_native::TARGET_CLASS;

#[cfg(test)]
mod export_tests {
    use super::*;

    fn type_name_of<T>(_: &T) -> &'static str {
        std::any::type_name::<T>()
    }

    #[test]
    fn test_exported_names_match_method_table() {
        let exported = [
            type_name_of(&Java_net_kaedenn_debugtoy_SurfaceAnimation_animateNative),
            type_name_of(&Java_net_kaedenn_debugtoy_SurfaceAnimation_funcNative),
        ];

        assert_eq!(NATIVE_METHODS.len(), exported.len());
        for (method, path) in NATIVE_METHODS.iter().zip(exported) {
            let symbol = method.symbol(TARGET_CLASS);
            assert!(
                path.ends_with(&format!("::{}", symbol)),
                "{} does not end with {}",
                path,
                symbol
            );
        }
    }

    #[test]
    fn test_signatures_are_well_formed() {
        for method in NATIVE_METHODS {
            assert!(mangle_long_name(TARGET_CLASS, method.name, method.signature).is_some());
            assert!(method.signature.ends_with(")V"));
        }
    }

    #[test]
    fn test_animate_long_name() {
        let animate = NATIVE_METHODS[0];
        assert_eq!(
            mangle_long_name(TARGET_CLASS, animate.name, animate.signature).as_deref(),
            Some(
                "Java_net_kaedenn_debugtoy_SurfaceAnimation_animateNative__\
                 _3Lnet_kaedenn_debugtoy_SurfaceAnimation_00024Particle_2_3F_3F"
            )
        );
    }
}

#[cfg(test)]
mod mangle_property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_plain_identifiers_pass_through(
            package in "[a-z][a-z0-9]{0,8}",
            class in "[A-Z][A-Za-z0-9]{0,12}",
            method in "[a-z][A-Za-z0-9]{0,12}",
        ) {
            let name = mangle_short_name(&format!("{}/{}", package, class), &method);
            prop_assert_eq!(name, format!("Java_{}_{}_{}", package, class, method));
        }

        #[test]
        fn prop_output_is_a_c_identifier(class in "\\PC{1,16}", method in "\\PC{1,16}") {
            let name = mangle_short_name(&class, &method);
            prop_assert!(name.starts_with("Java_"));
            prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }

        #[test]
        fn prop_underscores_never_collide_with_separators(a in "[a-z]{1,6}", b in "[a-z]{1,6}") {
            let nested = mangle_short_name(&format!("{}/{}", a, b), "m");
            let underscored = mangle_short_name(&format!("{}_{}", a, b), "m");
            prop_assert_ne!(nested, underscored);
        }
    }
}
