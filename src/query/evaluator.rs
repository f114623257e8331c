//! Set-algebra evaluation of boolean expressions.

use bit_vec::BitVec;

use crate::index::inverted::InvertedIndex;
use crate::query::parser::QueryExpr;

/// Evaluate an expression tree to a document bitset.
///
/// Leaves resolve to their term's posting set; AND is set intersection, OR
/// is set union, and NOT is set complement against the universe of all
/// indexed documents — never a numeric trick. Evaluation is a pure read of
/// the index.
pub fn evaluate(expr: &QueryExpr, index: &InvertedIndex) -> BitVec {
    match expr {
        QueryExpr::Term(id) => index.postings(*id).clone(),
        QueryExpr::Not(inner) => {
            let mut bits = evaluate(inner, index);
            bits.negate();
            bits
        }
        QueryExpr::And(lhs, rhs) => {
            let mut bits = evaluate(lhs, index);
            bits.and(&evaluate(rhs, index));
            bits
        }
        QueryExpr::Or(lhs, rhs) => {
            let mut bits = evaluate(lhs, index);
            bits.or(&evaluate(rhs, index));
            bits
        }
    }
}
