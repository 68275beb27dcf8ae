//! # Symbol Names
//!
//! JNI resolves a native method to the exported symbol
//! `Java_<mangled class>_<mangled method>`, with the signature appended
//! after `__` for overloaded methods.
//!
//! Escapes: `/` becomes `_`, `_` becomes `_1`, `;` becomes `_2`, `[`
//! becomes `_3`, and anything that is not an ASCII letter or digit
//! becomes `_0` followed by four lower-case hex digits per UTF-16 unit.

/// A native method as declared on the managed class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeMethod {
    pub name: &'static str,
    pub signature: &'static str,
}

impl NativeMethod {
    /// Short symbol name for this method on `class`
    pub fn symbol(&self, class: &str) -> String {
        mangle_short_name(class, self.name)
    }
}

/// `animateNative(Particle[] particles, float[] wh, float[] ddxy)`
pub const ANIMATE_NATIVE: NativeMethod = NativeMethod {
    name: "animateNative",
    signature: "([Lnet/kaedenn/debugtoy/SurfaceAnimation$Particle;[F[F)V",
};

/// `funcNative()`
pub const FUNC_NATIVE: NativeMethod = NativeMethod {
    name: "funcNative",
    signature: "()V",
};

/// Every method implemented by this library
pub const NATIVE_METHODS: &[NativeMethod] = &[ANIMATE_NATIVE, FUNC_NATIVE];

fn push_mangled(out: &mut String, component: &str) {
    for c in component.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' => out.push(c),
            '/' => out.push('_'),
            '_' => out.push_str("_1"),
            ';' => out.push_str("_2"),
            '[' => out.push_str("_3"),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("_0{:04x}", unit));
                }
            }
        }
    }
}

/// Mangle a class name (`a/b/C`) and method name into a short symbol
pub fn mangle_short_name(class: &str, method: &str) -> String {
    let mut out = String::with_capacity(6 + class.len() + method.len());
    out.push_str("Java_");
    push_mangled(&mut out, class);
    out.push('_');
    push_mangled(&mut out, method);
    out
}

/// Long symbol name, which also encodes the argument types of `signature`.
///
/// The JVM only looks for this form when a native method is overloaded.
/// `NATIVE_METHODS` has no overloads, so the exports use short names.
///
/// Returns `None` when `signature` is not of the form `(args)ret`.
pub fn mangle_long_name(class: &str, method: &str, signature: &str) -> Option<String> {
    let args = signature.strip_prefix('(')?;
    let end = args.find(')')?;

    let mut out = mangle_short_name(class, method);
    out.push_str("__");
    push_mangled(&mut out, &args[..end]);
    Some(out)
}
