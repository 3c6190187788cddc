/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Turns generated token streams into source text.
//!
//! Without `codegen-rustfmt`, a single-pass printer lays out tokens well enough to read and diff the bindings.
//! With it, files are written unformatted and `rustfmt` is run over them afterwards.

#[cfg(not(feature = "codegen-rustfmt"))]
pub(crate) use printer::format_tokens;

#[cfg(feature = "codegen-rustfmt")]
pub(crate) use external::rustfmt_files;

#[cfg(not(feature = "codegen-rustfmt"))]
mod printer {
    use proc_macro2::{Delimiter, Group, Punct, Spacing, TokenStream, TokenTree};

    /// Best-effort layout of a token stream.
    ///
    /// Line breaks go after `;`, around brace groups, after attributes and after `,` following a closing brace
    /// (struct literals in dispatch tables). Everything else stays on one line, with spacing guessed from the previous token:
    /// - `::` and `$` stick to what follows;
    /// - `&` and `!` stick to what follows, unless they complete a joint operator (`&&`, `!=`);
    /// - identifiers followed by `.`, `(` or `[` stay attached (`f()`, `s.x`).
    ///
    /// Known blemishes, which do not affect correctness: generics print as `Vec < T >`, closures as `| x |`,
    /// and bitwise-and as `a &mask`.
    pub(crate) fn format_tokens(tokens: TokenStream) -> String {
        let mut printer = Printer {
            out: String::new(),
            level: 0,
            state: State::Start,
        };

        printer.stream(tokens);
        printer.out
    }

    /// What the previous token implies for the whitespace before the next one.
    #[derive(Copy, Clone, Eq, PartialEq)]
    enum State {
        /// Line start: no whitespace.
        Start,
        /// Plain single space.
        Spaced,
        /// After a joint operator or prefix like `&`: no whitespace.
        Joined,
        /// After `::`.
        PathSeparator,
        /// After an identifier: calls, indexing and field access stay attached.
        Ident,
        /// After `}`: a new line, unless `;` or `,` follows.
        ClosingBrace,
        /// After `#`: attribute follows.
        Hash,
    }

    struct Printer {
        out: String,
        level: usize,
        state: State,
    }

    impl Printer {
        fn stream(&mut self, tokens: TokenStream) {
            for tt in tokens {
                match tt {
                    TokenTree::Punct(punct) => self.punct(&punct),
                    TokenTree::Ident(ident) => self.word(&ident.to_string()),
                    TokenTree::Literal(lit) => {
                        self.word(&lit.to_string());
                        self.state = State::Spaced;
                    }
                    TokenTree::Group(group) => self.group(&group),
                }
            }
        }

        fn newline(&mut self) {
            self.out.push('\n');
            for _ in 0..self.level {
                self.out.push_str("    ");
            }
        }

        fn punct(&mut self, punct: &Punct) {
            let c = punct.as_char();

            match self.state {
                State::Spaced if c != ';' && c != ',' => self.out.push(' '),
                State::Ident if !matches!(c, '.' | ';' | ',' | ':') => self.out.push(' '),
                State::ClosingBrace if c != ';' && c != ',' => self.newline(),
                _ => {}
            }

            self.out.push(c);

            let previous = self.state;
            self.state = match (c, previous) {
                (';', _) => {
                    self.newline();
                    State::Start
                }
                (',', State::ClosingBrace) => {
                    self.newline();
                    State::Start
                }
                ('#', _) => State::Hash,
                ('!', State::Hash) => State::Hash,
                ('$', _) => State::Joined,
                ('&' | '!', State::Joined) => State::Spaced,
                ('&' | '!', _) => State::Joined,
                (':', State::Joined) => State::PathSeparator,
                ('.', State::Ident) => State::Joined,
                (_, State::Hash) => State::Joined,
                (_, State::ClosingBrace) => State::Spaced,
                _ if punct.spacing() == Spacing::Joint => State::Joined,
                _ => State::Spaced,
            };
        }

        fn word(&mut self, word: &str) {
            match self.state {
                State::Spaced | State::Ident => self.out.push(' '),
                State::ClosingBrace => self.newline(),
                State::Start | State::Joined | State::PathSeparator | State::Hash => {}
            }

            self.out.push_str(word);
            self.state = State::Ident;
        }

        fn group(&mut self, group: &Group) {
            let delimiter = group.delimiter();

            match self.state {
                State::Spaced => self.out.push(' '),
                State::Ident if matches!(delimiter, Delimiter::Brace | Delimiter::None) => self.out.push(' '),
                State::ClosingBrace => self.newline(),
                _ => {}
            }

            let was_hash = self.state == State::Hash;
            match delimiter {
                Delimiter::Brace => {
                    self.out.push('{');
                    self.level += 1;
                    self.newline();
                    self.nested(group.stream());
                    self.level -= 1;

                    // Drop the indentation of an empty last line before closing.
                    let trimmed = self.out.trim_end_matches(' ').len();
                    self.out.truncate(trimmed);
                    if !self.out.ends_with('\n') {
                        self.out.push('\n');
                    }
                    for _ in 0..self.level {
                        self.out.push_str("    ");
                    }
                    self.out.push('}');
                    self.state = State::ClosingBrace;
                }
                Delimiter::Bracket => {
                    self.out.push('[');
                    self.nested(group.stream());
                    self.out.push(']');

                    if was_hash {
                        self.newline();
                        self.state = State::Start;
                    } else {
                        self.state = State::Spaced;
                    }
                }
                Delimiter::Parenthesis => {
                    self.out.push('(');
                    self.nested(group.stream());
                    self.out.push(')');
                    self.state = State::Spaced;
                }
                Delimiter::None => {
                    self.nested(group.stream());
                    self.state = State::Spaced;
                }
            }
        }

        fn nested(&mut self, tokens: TokenStream) {
            self.state = State::Start;
            self.stream(tokens);
        }
    }
}

#[cfg(feature = "codegen-rustfmt")]
mod external {
    use std::path::PathBuf;
    use std::process::Command;

    /// Formats the given files in place. Failure only degrades readability, so it is logged, not returned.
    pub(crate) fn rustfmt_files(files: &[PathBuf]) {
        if files.is_empty() {
            return;
        }

        let rustfmt = match which::which("rustfmt") {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("rustfmt not found, generated files stay unformatted: {err}");
                return;
            }
        };

        tracing::debug!("formatting {} generated files", files.len());
        let output = Command::new(rustfmt).arg("--edition=2021").args(files).output();

        match output {
            Ok(output) if output.status.success() => {}
            Ok(output) => tracing::warn!(
                "rustfmt failed ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            ),
            Err(err) => tracing::warn!("rustfmt could not be run: {err}"),
        }
    }
}
