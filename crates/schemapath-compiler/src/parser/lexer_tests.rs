use super::lexer::{TokenKind, lex, token_text};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn keywords_and_punctuation() {
    assert_eq!(
        kinds("@Schema class Order { id: int; }"),
        vec![
            TokenKind::At,
            TokenKind::Ident,
            TokenKind::Class,
            TokenKind::Ident,
            TokenKind::LBrace,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::RBrace,
        ]
    );
}

#[test]
fn keyword_prefix_is_identifier() {
    assert_eq!(kinds("classes finally"), vec![TokenKind::Ident, TokenKind::Ident]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    let source = "// header\nclass A {} // trailing\n";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Class,
            TokenKind::Ident,
            TokenKind::LBrace,
            TokenKind::RBrace
        ]
    );
}

#[test]
fn unrecognized_run_is_one_token() {
    let source = "a #%# b";
    let tokens = lex(source);
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Ident, TokenKind::Garbage, TokenKind::Ident]
    );
    assert_eq!(token_text(source, &tokens[1]), "#%#");
}

#[test]
fn trailing_garbage_reaches_end() {
    let source = "a ##";
    let tokens = lex(source);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Garbage));
    assert_eq!(token_text(source, &tokens[1]), "##");
}

#[test]
fn identifiers_allow_dollar_and_underscore() {
    let source = "_name $inner";
    let tokens = lex(source);
    assert_eq!(token_text(source, &tokens[0]), "_name");
    assert_eq!(token_text(source, &tokens[1]), "$inner");
}

#[test]
fn garbage_run_stops_before_skipped_trivia() {
    let source = "a #% // note\n b";
    let tokens = lex(source);
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Ident, TokenKind::Garbage, TokenKind::Ident]
    );
    assert_eq!(token_text(source, &tokens[1]), "#%");
}

#[test]
fn garbage_separated_by_whitespace_is_split() {
    let source = "# %";
    let tokens = lex(source);
    let texts: Vec<&str> = tokens.iter().map(|t| token_text(source, t)).collect();
    assert_eq!(texts, ["#", "%"]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Garbage));
}

#[test]
fn trailing_comment_is_skipped() {
    let source = "a // trailing";
    let tokens = lex(source);
    assert_eq!(tokens.len(), 1);
    assert_eq!(token_text(source, &tokens[0]), "a");
}
