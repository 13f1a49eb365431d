mod codechef;
mod codeforces;
mod gfg;
mod hackerrank;
mod leetcode;
mod platform;

pub use codechef::*;
pub use codeforces::*;
pub use gfg::*;
pub use hackerrank::*;
pub use leetcode::*;
pub use platform::*;
