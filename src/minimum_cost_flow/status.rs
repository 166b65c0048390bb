#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Status {
    Infeasible,
    Overflow,
    Optimal,
}
