use lazy_static::*;

use super::dfa::*;
use super::nfa::*;
use super::token::ExprTokenType;

lazy_static! {
    /// Built once; the table is immutable afterwards and shared by every
    /// evaluation.
    pub static ref EXPR_TOKENIZER: DFA<ExprTokenType> = get_expr_tokenizer();
}

pub fn get_expr_tokenizer() -> DFA<ExprTokenType> {
    let digit = NFA::from_symbol_range('0'..='9');
    // `~` is the only way to write a negative number
    let mut num = NFA::zero_or_one('~') & digit.one_or_more();
    num.set_state(ExprTokenType::Num);

    let mut add = NFA::from_symbol('+');
    add.set_state(ExprTokenType::Add);

    let mut sub = NFA::from_symbol('-');
    sub.set_state(ExprTokenType::Sub);

    let mut mul = NFA::from_symbol('*');
    mul.set_state(ExprTokenType::Mul);

    let mut div = NFA::from_symbol('/');
    div.set_state(ExprTokenType::Div);

    let mut pow = NFA::from_symbol('^');
    pow.set_state(ExprTokenType::Pow);

    let mut left_scope = NFA::from_symbol('(');
    left_scope.set_state(ExprTokenType::LeftScope);

    let mut right_scope = NFA::from_symbol(')');
    right_scope.set_state(ExprTokenType::RightScope);

    let mut blank = NFA::from_symbol_set(" \t\r\n").one_or_more();
    blank.set_state(ExprTokenType::Blank);

    let tokenizer_nfa = NFA::link(vec![num, add, sub, mul, div, pow, left_scope, right_scope, blank]);

    DFA::subset_construct(&tokenizer_nfa)
}

#[cfg(test)]
mod test {
    use super::EXPR_TOKENIZER;
    use crate::error::EvalError;
    use crate::tokenizer::token::ExprTokenType::{self, *};

    fn types(origin: &str) -> Vec<ExprTokenType> {
        EXPR_TOKENIZER.tokenize(origin).unwrap().into_iter().map(|t| t.ty).collect()
    }

    #[test]
    fn test_tokenizer() {
        assert_eq!(
            types("(12 + ~3)*4 ^ 2 - 10/5"),
            vec![LeftScope, Num, Add, Num, RightScope, Mul, Num, Pow, Num, Sub, Num, Div, Num]
        );
        assert!(types("   ").is_empty());
        assert!(types("").is_empty());
    }

    #[test]
    fn test_token_values() {
        let tokens = EXPR_TOKENIZER.tokenize("  ~0042-7").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].val, "~0042");
        assert_eq!(tokens[0].pos, 2);
        assert_eq!(tokens[1].ty, Sub);
        assert_eq!(tokens[2].val, "7");
        assert_eq!(tokens[2].pos, 8);
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(
            EXPR_TOKENIZER.tokenize("1@2"),
            Err(EvalError::UnknownCharacter { ch: '@', pos: 1 })
        );
        assert_eq!(
            EXPR_TOKENIZER.tokenize("3 + ~"),
            Err(EvalError::UnknownCharacter { ch: '~', pos: 4 })
        );
        assert_eq!(
            EXPR_TOKENIZER.tokenize("~ 5"),
            Err(EvalError::UnknownCharacter { ch: ' ', pos: 1 })
        );
    }
}
