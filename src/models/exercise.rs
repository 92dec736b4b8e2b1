use super::operation::Operation;

/// One round: two operands and whether an operation has been picked yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    Unselected { a: i32, b: i32 },
    Selected { a: i32, b: i32, operation: Operation },
}

impl Exercise {
    pub fn new(a: i32, b: i32) -> Self {
        Exercise::Unselected { a, b }
    }

    pub fn operands(&self) -> (i32, i32) {
        match *self {
            Exercise::Unselected { a, b } | Exercise::Selected { a, b, .. } => (a, b),
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        match *self {
            Exercise::Unselected { .. } => None,
            Exercise::Selected { operation, .. } => Some(operation),
        }
    }

    pub fn select(&mut self, operation: Operation) {
        let (a, b) = self.operands();
        *self = Exercise::Selected { a, b, operation };
    }

    pub fn expected(&self) -> Option<i32> {
        match *self {
            Exercise::Unselected { .. } => None,
            Exercise::Selected { a, b, operation } => Some(operation.apply(a, b)),
        }
    }
}
