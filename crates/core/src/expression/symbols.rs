use std::collections::BTreeSet;

use crate::DomainError;

/// Whitelisted single-argument math functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MathFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
}

impl MathFunction {
    pub const ALL: [Self; 18] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Exp,
        Self::Ln,
        Self::Log10,
        Self::Log2,
        Self::Sqrt,
        Self::Cbrt,
        Self::Abs,
        Self::Floor,
        Self::Ceil,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
        }
    }

    /// Applies the function, rejecting arguments outside its real domain.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfDomain` for e.g. `sqrt(-1)` or `ln(0)`.
    pub fn apply(self, arg: f64) -> Result<f64, DomainError> {
        let out_of_domain = match self {
            Self::Sqrt => arg < 0.0,
            Self::Ln | Self::Log10 | Self::Log2 => arg <= 0.0,
            Self::Asin | Self::Acos => arg.abs() > 1.0,
            _ => false,
        };
        if out_of_domain {
            return Err(DomainError::OutOfDomain {
                function: self.name(),
                arg,
            });
        }

        Ok(match self {
            Self::Sin => arg.sin(),
            Self::Cos => arg.cos(),
            Self::Tan => arg.tan(),
            Self::Asin => arg.asin(),
            Self::Acos => arg.acos(),
            Self::Atan => arg.atan(),
            Self::Sinh => arg.sinh(),
            Self::Cosh => arg.cosh(),
            Self::Tanh => arg.tanh(),
            Self::Exp => arg.exp(),
            Self::Ln => arg.ln(),
            Self::Log10 => arg.log10(),
            Self::Log2 => arg.log2(),
            Self::Sqrt => arg.sqrt(),
            Self::Cbrt => arg.cbrt(),
            Self::Abs => arg.abs(),
            Self::Floor => arg.floor(),
            Self::Ceil => arg.ceil(),
        })
    }
}

/// Whitelisted named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Constant {
    Pi,
    E,
    Tau,
}

impl Constant {
    pub const ALL: [Self; 3] = [Self::Pi, Self::E, Self::Tau];

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
            Self::Tau => "tau",
        }
    }

    /// Returns the constant's value.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
            Self::Tau => std::f64::consts::TAU,
        }
    }
}

/// A named symbol an expression may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Function(MathFunction),
    Constant(Constant),
}

impl Symbol {
    /// Resolves a name (without any `math.` prefix) to a known symbol.
    ///
    /// `log` and `fabs` are accepted as aliases of `ln` and `abs`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "log" => return Some(Self::Function(MathFunction::Ln)),
            "fabs" => return Some(Self::Function(MathFunction::Abs)),
            _ => {}
        }

        MathFunction::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .map(Self::Function)
            .or_else(|| {
                Constant::ALL
                    .into_iter()
                    .find(|c| c.name() == name)
                    .map(Self::Constant)
            })
    }
}

impl From<MathFunction> for Symbol {
    fn from(function: MathFunction) -> Self {
        Self::Function(function)
    }
}

impl From<Constant> for Symbol {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}

/// The set of named symbols an expression is allowed to reference.
///
/// The free variable `x`, numeric literals, and operators are always allowed.
///
/// # Example
///
/// ```
/// use rootfind_core::{Expression, Symbols, expression::MathFunction};
///
/// let no_trig = Symbols::all()
///     .deny(MathFunction::Sin)
///     .deny(MathFunction::Cos);
///
/// assert!(Expression::parse_with("exp(x) - 2", &no_trig).is_ok());
/// assert!(Expression::parse_with("sin(x)", &no_trig).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    allowed: BTreeSet<Symbol>,
}

impl Symbols {
    /// Allows every whitelisted function and constant.
    #[must_use]
    pub fn all() -> Self {
        let functions = MathFunction::ALL.into_iter().map(Symbol::Function);
        let constants = Constant::ALL.into_iter().map(Symbol::Constant);
        Self {
            allowed: functions.chain(constants).collect(),
        }
    }

    /// Allows no named symbols, only `x`, literals, and operators.
    #[must_use]
    pub fn none() -> Self {
        Self {
            allowed: BTreeSet::new(),
        }
    }

    /// Adds a symbol to the allowed set.
    #[must_use]
    pub fn allow(mut self, symbol: impl Into<Symbol>) -> Self {
        self.allowed.insert(symbol.into());
        self
    }

    /// Removes a symbol from the allowed set.
    #[must_use]
    pub fn deny(mut self, symbol: impl Into<Symbol>) -> Self {
        self.allowed.remove(&symbol.into());
        self
    }

    /// Returns true if the symbol is allowed.
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.allowed.contains(&symbol)
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::all()
    }
}
