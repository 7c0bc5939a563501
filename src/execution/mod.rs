// Execution - Environment bindings for funded invocations
// Principle: What the original environment did implicitly (pay value along
// with a call) is modelled as explicit data here.

pub mod call;

pub use call::Invocation;
