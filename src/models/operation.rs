#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
        }
    }

    /// Operands are bounded by `Difficulty`, so none of these can overflow.
    pub fn apply(&self, a: i32, b: i32) -> i32 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
        }
    }

    pub fn parse(s: &str) -> Option<Operation> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" => Some(Operation::Add),
            "-" | "sub" | "subtract" => Some(Operation::Subtract),
            "*" | "x" | "×" | "mul" | "multiply" => Some(Operation::Multiply),
            _ => None,
        }
    }
}
