pub trait TokenType: Copy {
    /// Blank tokens are matched but never handed to the parser.
    fn is_blank(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExprTokenType {
    Num,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    LeftScope,
    RightScope,
    Blank,
}

impl TokenType for ExprTokenType {
    fn is_blank(&self) -> bool {
        matches!(self, ExprTokenType::Blank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<TokenType> {
    pub val: String,
    pub ty: TokenType,
    /// Character offset of the token's first symbol in the input.
    pub pos: usize,
}

impl<TokenType> Token<TokenType> {
    pub fn new(val: String, ty: TokenType, pos: usize) -> Token<TokenType> {
        Token { val, ty, pos }
    }
}
