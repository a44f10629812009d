use typlex_parser::typlex::highlighting::MarkerKind::*;
use typlex_parser::typlex::testing::{assert_markers, highlight_text, marker, render_markers};

#[test]
fn test_line_comment() {
    assert_markers("a // comment line\nb", &[marker(Comment, 2, 16)]);
}

#[test]
fn test_block_comment() {
    assert_markers(
        "a /* comment\ncomment\ncomment*/ b",
        &[marker(Comment, 2, 28)],
    );
    assert_markers(
        "/* aaa\naaa // aaaaaaa */\naaa*/ aaaa",
        &[marker(Comment, 11, 14), marker(Comment, 0, 30)],
    );
}

#[test]
fn test_line_comment_leaves_line_end_to_enclosing_frame() {
    assert_markers(
        "#let x = 1 // note\n*bold* text",
        &[
            marker(Keyword, 0, 4),
            marker(NumberLiteral, 9, 1),
            marker(Comment, 11, 8),
            marker(StrongEmphasis, 19, 6),
        ],
    );
    assert_markers(
        "= Title // note\nbody *x*",
        &[
            marker(Heading, 0, 16),
            marker(Comment, 8, 8),
            marker(StrongEmphasis, 21, 3),
        ],
    );
    assert_markers(
        "*a // c\n\n*",
        &[
            marker(StrongEmphasis, 0, 9),
            marker(Comment, 3, 5),
            marker(StrongEmphasis, 9, 1),
        ],
    );
}

#[test]
fn test_comments_and_raw_are_inert() {
    assert_markers("// \\$ @ref <l>", &[marker(Comment, 0, 14)]);
    assert_markers("/* \\u{41} @x */", &[marker(Comment, 0, 15)]);
    assert_markers("`\\$ @x`", &[marker(Raw, 0, 7)]);
}

#[test]
fn test_empty_input_has_no_markers() {
    assert_markers("", &[]);
}

#[test]
fn test_string_literal() {
    assert_markers(
        "\"not a literal\" $ \"yesliteral\" + 1$",
        &[
            marker(MathDelimiter, 16, 1),
            marker(StringLiteral, 18, 12),
            marker(MathOperator, 31, 1),
            marker(MathDelimiter, 34, 1),
        ],
    );
    assert_markers(
        "$ \"A /* $ \" */ $",
        &[
            marker(MathDelimiter, 0, 1),
            marker(StringLiteral, 2, 9),
            marker(MathOperator, 12, 1),
            marker(MathOperator, 13, 1),
            marker(MathDelimiter, 15, 1),
        ],
    );
    assert_markers(
        "\"not a literal\" #foo(\"yesliteral\")",
        &[marker(FunctionName, 16, 4), marker(StringLiteral, 21, 12)],
    );
}

#[test]
fn test_escapes() {
    assert_markers(
        "_\\$ \\_ foo _ \\ More: \"\\u{1f600}\"",
        &[
            marker(Emphasis, 0, 12),
            marker(Escape, 1, 2),
            marker(Escape, 4, 2),
            marker(Escape, 22, 9),
        ],
    );
    assert_markers(
        "$ \\u{12} + \"a\\nb\" $",
        &[
            marker(MathDelimiter, 0, 1),
            marker(Escape, 2, 6),
            marker(MathOperator, 9, 1),
            marker(StringLiteral, 11, 6),
            marker(Escape, 13, 2),
            marker(MathDelimiter, 18, 1),
        ],
    );
}

#[test]
fn test_headings() {
    assert_markers(
        "=== this is a heading\nthis is not.\n \t= but this is",
        &[marker(Heading, 0, 22), marker(Heading, 34, 16)],
    );
    assert_markers("a == not header\n=not header too", &[]);
}

#[test]
fn test_emphasis() {
    assert_markers(
        "a *bold* _underline_ and _*nested*_",
        &[
            marker(StrongEmphasis, 2, 6),
            marker(Emphasis, 9, 11),
            marker(Emphasis, 25, 10),
            marker(StrongEmphasis, 26, 8),
        ],
    );
    assert_markers(
        "== for some reason, _emphasis\nextends_ headers",
        &[marker(Heading, 0, 46), marker(Emphasis, 20, 18)],
    );
    assert_markers(
        "*bold broken by paragraph break\n  \n*",
        &[marker(StrongEmphasis, 0, 35), marker(StrongEmphasis, 35, 1)],
    );
}

#[test]
fn test_raw_content() {
    assert_markers(
        "`` `some $raw$ with _emph_` `raw with\nnewline`",
        &[marker(Raw, 0, 2), marker(Raw, 3, 24), marker(Raw, 28, 18)],
    );
    assert_markers(
        "```some $raw$ with _emph_` ``` ```raw block with\nnewline```",
        &[marker(Raw, 0, 30), marker(Raw, 31, 28)],
    );
}

#[test]
fn test_reference_and_label() {
    assert_markers(
        "@ref123 foo <a_label> <not a label> //<also_not_label",
        &[
            marker(Reference, 0, 7),
            marker(Label, 12, 9),
            marker(Comment, 36, 17),
        ],
    );
    assert_markers(
        "<label_with_trailing_>\n@a_reference_with_trailing__",
        &[marker(Label, 0, 22), marker(Reference, 23, 28)],
    );
    assert_markers(
        "== The nature of @label\n_this is the <label>_",
        &[
            marker(Heading, 0, 24),
            marker(Reference, 17, 6),
            marker(Emphasis, 24, 21),
            marker(Label, 37, 7),
        ],
    );
}

#[test]
fn test_reference_drops_trailing_punctuation() {
    assert_markers("see @fig. Then", &[marker(Reference, 4, 4)]);
}

#[test]
fn test_lists() {
    assert_markers(
        "- - this\n- this\n\t- that",
        &[
            marker(ListEntry, 0, 2),
            marker(ListEntry, 8, 3),
            marker(ListEntry, 15, 4),
        ],
    );
    assert_markers(
        "+ - this\n+this\n\t+ that",
        &[marker(ListEntry, 0, 2), marker(ListEntry, 14, 4)],
    );
    assert_markers(
        "/ This: That\n/Not This: Not that\n/Neither This",
        &[marker(ListEntry, 0, 2), marker(Term, 2, 4)],
    );
}

#[test]
fn test_math_expressions() {
    assert_markers(
        "$x^2$",
        &[
            marker(MathDelimiter, 0, 1),
            marker(MathOperator, 2, 1),
            marker(MathDelimiter, 4, 1),
        ],
    );
    assert_markers(
        "$x &= 2 \\ &= 3$",
        &[
            marker(MathDelimiter, 0, 1),
            marker(MathOperator, 3, 1),
            marker(MathOperator, 4, 1),
            marker(MathOperator, 8, 1),
            marker(MathOperator, 10, 1),
            marker(MathOperator, 11, 1),
            marker(MathDelimiter, 14, 1),
        ],
    );
    assert_markers(
        "$#x$, $pi$",
        &[
            marker(MathDelimiter, 0, 1),
            marker(VariableName, 1, 2),
            marker(MathDelimiter, 3, 1),
            marker(MathDelimiter, 6, 1),
            marker(VariableName, 7, 2),
            marker(MathDelimiter, 9, 1),
        ],
    );
    assert_markers(
        "$arrow.r.long$",
        &[
            marker(MathDelimiter, 0, 1),
            marker(VariableName, 1, 5),
            marker(VariableName, 7, 1),
            marker(VariableName, 9, 4),
            marker(MathDelimiter, 13, 1),
        ],
    );
    assert_markers(
        "$floor(x)$",
        &[
            marker(MathDelimiter, 0, 1),
            marker(FunctionName, 1, 5),
            marker(MathDelimiter, 9, 1),
        ],
    );
    assert_markers(
        "$#rect(width: 1cm) + 1$",
        &[
            marker(MathDelimiter, 0, 1),
            marker(FunctionName, 1, 5),
            marker(NumberLiteral, 14, 3),
            marker(MathOperator, 19, 1),
            marker(MathDelimiter, 22, 1),
        ],
    );
    assert_markers(
        "$/* comment */$",
        &[
            marker(MathDelimiter, 0, 1),
            marker(Comment, 1, 13),
            marker(MathDelimiter, 14, 1),
        ],
    );
}

#[test]
fn test_set_rules() {
    assert_markers(
        "#set heading(numbering: \"I.\")\n#set text(\n  font: \"New Computer Modern\"\n)\n\n= Introduction",
        &[
            marker(Keyword, 0, 4),
            marker(FunctionName, 5, 7),
            marker(StringLiteral, 24, 4),
            marker(Keyword, 30, 4),
            marker(FunctionName, 35, 4),
            marker(StringLiteral, 49, 21),
            marker(Heading, 73, 15),
        ],
    );
    assert_markers(
        "#let task(body, critical: false) = {\n  set text(red) if critical\n  [- #body]\n}\n\n#task(critical: true)[Food today?]\n#task(critical: false)[Work deadline]",
        &[
            marker(Keyword, 0, 4),
            marker(FunctionName, 5, 4),
            marker(Keyword, 26, 5),
            marker(Keyword, 39, 3),
            marker(FunctionName, 43, 4),
            marker(Keyword, 53, 2),
            marker(VariableName, 70, 5),
            marker(FunctionName, 80, 5),
            marker(Keyword, 96, 4),
            marker(FunctionName, 115, 5),
            marker(Keyword, 131, 5),
        ],
    );
}

#[test]
fn test_show_rules() {
    assert_markers(
        "#show heading: it => [\n  #set align(center)\n  #set text(font: \"Inria Serif\")\n  \\~ #emph(it.body)\n      #counter(heading).display() \\~\n]",
        &[
            marker(Keyword, 0, 5),
            marker(Keyword, 25, 4),
            marker(FunctionName, 30, 5),
            marker(Keyword, 46, 4),
            marker(FunctionName, 51, 4),
            marker(StringLiteral, 62, 13),
            marker(Escape, 79, 2),
            marker(FunctionName, 82, 5),
            marker(FunctionName, 103, 8),
            marker(FunctionName, 121, 7),
            marker(Escape, 131, 2),
        ],
    );
}

#[test]
fn test_code_expressions() {
    assert_markers(
        "#emph[Hello] \\\n#emoji.face \\\n#\"hello\".len().a\n#(40em.abs.inches(), 12%)\n#40em.abs.inches()",
        &[
            marker(FunctionName, 0, 5),
            marker(VariableName, 15, 6),
            marker(VariableName, 22, 4),
            marker(StringLiteral, 29, 8),
            marker(FunctionName, 38, 3),
            marker(VariableName, 44, 1),
            marker(NumberLiteral, 48, 4),
            marker(FunctionName, 57, 6),
            marker(NumberLiteral, 67, 3),
            marker(NumberLiteral, 72, 5),
            marker(VariableName, 78, 3),
            marker(FunctionName, 82, 6),
        ],
    );
}

#[test]
fn test_blocks() {
    assert_markers(
        "#{\nlet a = [from]\nlet b = [*world*]\n[hello ]\na + [ the ] + b\n}",
        &[
            marker(Keyword, 3, 3),
            marker(Keyword, 18, 3),
            marker(StrongEmphasis, 27, 7),
        ],
    );
}

#[test]
fn test_loops() {
    assert_markers(
        "#for c in \"ABC\" [\n  #c is a letter.\n]\n\n#let n = 2\n#while n < 10 {\n  n = (n * 2) - 1\n}",
        &[
            marker(Keyword, 0, 4),
            marker(Keyword, 7, 2),
            marker(StringLiteral, 10, 5),
            marker(VariableName, 20, 2),
            marker(Keyword, 39, 4),
            marker(NumberLiteral, 48, 1),
            marker(Keyword, 50, 6),
            marker(NumberLiteral, 61, 2),
            marker(NumberLiteral, 77, 1),
            marker(NumberLiteral, 82, 1),
        ],
    );
}

#[test]
fn test_plain_prose_has_no_markers() {
    assert!(highlight_text("Just some words, nothing else.\nAnother line").is_empty());
}

#[test]
fn test_rendered_markers() {
    let text = "= Title *bold*\n$x$";
    let markers = highlight_text(text);
    insta::assert_snapshot!(render_markers(text, &markers).trim_end(), @r###"
    HEADING            0..15  "= Title *bold*\n"
    STRONG_EMPHASIS    8..14  "*bold*"
    MATH_DELIMITER    15..16  "$"
    MATH_DELIMITER    17..18  "$"
    "###);
}
