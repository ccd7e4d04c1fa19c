//! Fast, reduced-accuracy approximations of twelve transcendental
//! functions: `exp`, `exp2`, `expm1`, `sin`, `sinh`, `tan`, `tanh`,
//! `cos`, `cosh`, `arcsin`, `arccos`, `arcsinh`.
//!
//! Each model evaluates a fixed low-degree polynomial on a bounded
//! trusted interval (most of them `[-1, 1]`) and falls back to the
//! exact implementation or to a closed-form rule outside it. The
//! [`dispatch::dispatcher::Dispatcher`] switches the twelve names
//! between approximate and exact bindings at runtime.

pub mod approximationerror;
pub mod configuration;

pub mod array {
    pub mod elementwise;
}

pub mod dispatch {
    pub mod dispatcher;
    pub mod functionid;
    pub mod functiontable;
}

pub mod math {
    pub mod angle;
    pub mod polynomial;

    pub mod approximation {
        pub mod exponential;
        pub mod hyperbolic;
        pub mod inverse;
        pub mod trigonometric;
    }
}
