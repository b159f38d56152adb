use crate::interpreter::value::Value;

/// A binary operator that can appear in a postfix program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`), right-associative.
    Pow,
    /// Equality (`==`)
    Equal,
    /// Inequality (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// A prefix operator that can appear in a postfix program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// A leading `-`.
    Negate,
    /// A leading `+`.
    Plus,
    /// Logical negation (`not`)
    Not,
}

impl BinaryOperator {
    /// Binding strength used by the shunting-yard compiler. Higher binds
    /// tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Equal
            | Self::NotEqual
            | Self::Greater
            | Self::GreaterEqual
            | Self::Less
            | Self::LessEqual => 4,
            Self::Add | Self::Sub => 5,
            Self::Mul | Self::Div => 6,
            Self::Pow => 8,
        }
    }

    /// Returns `true` for operators that group from the right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// The verb used in arity diagnostics, e.g. "perform addition".
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
            Self::Pow => "exponentiation",
            Self::Equal
            | Self::NotEqual
            | Self::Greater
            | Self::GreaterEqual
            | Self::Less
            | Self::LessEqual => "comparison",
            Self::And => "logical and",
            Self::Or => "logical or",
        }
    }
}

impl UnaryOperator {
    /// Binding strength used by the shunting-yard compiler.
    ///
    /// `not` sits between `and` and the comparisons; the signs bind tighter
    /// than `*` and `/` but looser than `^`, so `-2^2` is `-4`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Not => 3,
            Self::Negate | Self::Plus => 7,
        }
    }

    /// The verb used in arity diagnostics.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Negate => "negation",
            Self::Plus => "unary plus",
            Self::Not => "logical not",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{symbol}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "neg"),
            Self::Plus => write!(f, "pos"),
            Self::Not => write!(f, "not"),
        }
    }
}

/// One step of a postfix program.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Push a literal value.
    Literal(Value),
    /// Push the current value of a variable.
    Load(String),
    /// Pop two operands, push the result.
    Binary(BinaryOperator),
    /// Pop one operand, push the result.
    Unary(UnaryOperator),
    /// Evaluate a nested conditional and push its result.
    Conditional(Conditional),
}

/// An expression compiled to reverse-polish order.
///
/// # Example
/// ```
/// use normal::{
///     ast::{BinaryOperator, Instruction, Program},
///     interpreter::value::Value,
/// };
///
/// // 2 + 3
/// let program = Program::new(vec![Instruction::Literal(Value::Number(2.0)),
///                                 Instruction::Literal(Value::Number(3.0)),
///                                 Instruction::Binary(BinaryOperator::Add)]);
///
/// assert_eq!(program.to_string(), "2 3 +");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Instructions in execution order.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Wraps a list of instructions.
    #[must_use]
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, instruction) in self.instructions.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            match instruction {
                Instruction::Literal(value) => write!(f, "{value}")?,
                Instruction::Load(name) => write!(f, "{name}")?,
                Instruction::Binary(op) => write!(f, "{op}")?,
                Instruction::Unary(op) => write!(f, "{op}")?,
                Instruction::Conditional(conditional) => write!(f, "({conditional})")?,
            }
        }
        Ok(())
    }
}

/// A single `if <condition> : <value>` arm.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Selects the branch when truthy.
    pub condition: Program,
    /// The result when selected.
    pub value:     Program,
}

/// An ordered list of branches with an optional fallback.
///
/// Branches are tried top to bottom and only the chosen value is evaluated.
/// Without a match and without a default the conditional has no value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditional {
    /// The `if` arms in source order.
    pub branches: Vec<Branch>,
    /// The trailing `: <value>`, if any.
    pub default:  Option<Program>,
}

impl std::fmt::Display for Conditional {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, branch) in self.branches.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "if {} : {}", branch.condition, branch.value)?;
        }
        if let Some(default) = &self.default {
            write!(f, " : {default}")?;
        }
        Ok(())
    }
}

/// Whether a binding may change after declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// Declared with `variable` or `let`; changeable via `is now be`.
    Mutable,
    /// Declared with `constant`; never changes.
    Constant,
}

/// A parsed line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `variable x is <expr>`, `let x be <expr>`, `constant x is <expr>`.
    Declaration {
        /// The new binding's name.
        name:       String,
        /// How the binding was declared.
        mutability: Mutability,
        /// The initial value.
        value:      Program,
    },
    /// `x is now be <expr>`
    Update {
        /// The existing binding's name.
        name:  String,
        /// The new value.
        value: Program,
    },
    /// A line starting with `if`.
    Conditional(Conditional),
    /// Anything else.
    Expression(Program),
    /// A line with no tokens.
    Empty,
}
