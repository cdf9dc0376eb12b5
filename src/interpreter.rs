/// The dispatcher classifies expressions and routes them to an evaluator.
///
/// It runs the whole pipeline for one input: tokenize, validate, classify,
/// evaluate.
///
/// # Responsibilities
/// - Rejects empty input.
/// - Runs the validation pipeline before any arithmetic.
/// - Picks the numeric, pure identifier, or identifier-mapped path.
pub mod dispatcher;
/// The evaluator module folds token streams into results.
///
/// The evaluator runs a two-stack shunting-yard algorithm over the tokens,
/// applying operators by precedence without building a syntax tree.
///
/// # Responsibilities
/// - Parses number lexemes and keeps integral values as integers.
/// - Applies `+ - * /` with left associativity.
/// - Maps identifiers to ordinals for mixed expressions.
/// - Reports runtime faults such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source text for the later phases.
///
/// The lexer reads the raw text and produces a stream of explicitly tagged
/// tokens: numbers, operators, parentheses, identifiers, and stray symbols.
/// This is the first stage of evaluation and it never fails.
pub mod lexer;
/// The validator checks structural well-formedness before evaluation.
///
/// # Responsibilities
/// - Checks that parentheses are balanced.
/// - Rejects operators at the edges of numeric expressions.
/// - Rejects lone identifiers.
/// - Runs both rule sets in a fixed order.
pub mod validator;
/// The value module defines the results of evaluation.
pub mod value;
