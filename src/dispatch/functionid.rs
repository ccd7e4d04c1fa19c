/// Identifier for the twelve function names covered by the
/// substitution mechanism.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FunctionId {
    Exp,
    Exp2,
    Expm1,
    Sin,
    Sinh,
    Tan,
    Tanh,
    Cos,
    Cosh,
    Arcsin,
    Arccos,
    Arcsinh,
}

impl FunctionId {
    pub const ALL: [FunctionId; 12] = [
        FunctionId::Exp,
        FunctionId::Exp2,
        FunctionId::Expm1,
        FunctionId::Sin,
        FunctionId::Sinh,
        FunctionId::Tan,
        FunctionId::Tanh,
        FunctionId::Cos,
        FunctionId::Cosh,
        FunctionId::Arcsin,
        FunctionId::Arccos,
        FunctionId::Arcsinh,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FunctionId::Exp => "exp",
            FunctionId::Exp2 => "exp2",
            FunctionId::Expm1 => "expm1",
            FunctionId::Sin => "sin",
            FunctionId::Sinh => "sinh",
            FunctionId::Tan => "tan",
            FunctionId::Tanh => "tanh",
            FunctionId::Cos => "cos",
            FunctionId::Cosh => "cosh",
            FunctionId::Arcsin => "arcsin",
            FunctionId::Arccos => "arccos",
            FunctionId::Arcsinh => "arcsinh",
        }
    }
}
