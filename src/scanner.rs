/*!
 * Lexical zone scanner for source files.
 *
 * This module classifies the bytes of a source file into translatable zones
 * (string literals, comments) and opaque zones (everything else, including
 * char literals). It performs no grammar validation beyond delimiter
 * matching: the goal is a lossless partition of the input, not a parse.
 *
 * Invariant: concatenating the raw spans of all zones, in order, reproduces
 * the input exactly. Reassembly with an identity translation is therefore
 * byte-identical to the source.
 */

/// Which syntactic wrapper produced a translatable zone.
///
/// The kind determines how a translated payload is re-wrapped on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    /// `// ...` up to (not including) the line break
    LineComment,
    /// `/* ... */`
    BlockComment,
    /// `/** ... */`
    DocComment,
    /// `"..."` with backslash escapes
    StringLiteral,
}

impl DelimiterKind {
    /// Opening delimiter text for this kind
    pub fn opener(&self) -> &'static str {
        match self {
            Self::LineComment => "//",
            Self::BlockComment => "/*",
            Self::DocComment => "/**",
            Self::StringLiteral => "\"",
        }
    }

    /// Closing delimiter text for this kind (empty for line comments)
    pub fn closer(&self) -> &'static str {
        match self {
            Self::LineComment => "",
            Self::BlockComment | Self::DocComment => "*/",
            Self::StringLiteral => "\"",
        }
    }
}

/// A classified contiguous span of source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Zone<'a> {
    /// Copied verbatim to output. Code, whitespace, char literals, and any
    /// span the scanner could not classify confidently (e.g. an unterminated
    /// string at end of input).
    Opaque(&'a str),

    /// A span whose inner payload is a candidate for translation
    Translatable {
        /// Delimiter kind used for re-wrapping
        kind: DelimiterKind,
        /// Inner text with delimiters stripped, escapes left as written
        payload: &'a str,
        /// Original raw span including delimiters
        raw: &'a str,
    },
}

impl<'a> Zone<'a> {
    /// The raw span of this zone as it appeared in the source
    pub fn raw(&self) -> &'a str {
        match self {
            Zone::Opaque(raw) => raw,
            Zone::Translatable { raw, .. } => raw,
        }
    }
}

/// Single-pass scanner yielding zones left to right.
///
/// Lazy and non-restartable: each call to `next` advances the cursor and the
/// sequence is finite. Lookahead never exceeds two bytes. All delimiters are
/// ASCII, so byte-wise scanning is safe for UTF-8 input and every emitted
/// slice falls on a character boundary.
pub struct ZoneScanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> ZoneScanner<'a> {
    /// Create a scanner over the given source text
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Scan a string or char literal body starting at the opening quote.
    ///
    /// Returns the index of the closing quote, or `None` if the literal runs
    /// off the end of the input. A backslash always escapes exactly the next
    /// byte, consumed as a pair.
    fn find_quote_end(&self, open: usize, quote: u8) -> Option<usize> {
        let bytes = self.src.as_bytes();
        let mut i = open + 1;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b if b == quote => return Some(i),
                _ => i += 1,
            }
        }
        None
    }

    /// Index just past a char literal starting at `open`, clamped to input end
    fn skip_char_literal(&self, open: usize) -> usize {
        match self.find_quote_end(open, b'\'') {
            Some(close) => close + 1,
            None => self.src.len(),
        }
    }

    /// Emit the string literal zone starting at `self.pos`
    fn scan_string(&mut self) -> Zone<'a> {
        let start = self.pos;
        match self.find_quote_end(start, b'"') {
            Some(close) => {
                let zone = Zone::Translatable {
                    kind: DelimiterKind::StringLiteral,
                    payload: &self.src[start + 1..close],
                    raw: &self.src[start..close + 1],
                };
                self.pos = close + 1;
                zone
            }
            // Unterminated literal: the payload cannot be safely
            // re-delimited, so the remainder stays opaque.
            None => {
                let zone = Zone::Opaque(&self.src[start..]);
                self.pos = self.src.len();
                zone
            }
        }
    }

    /// Emit the line comment zone starting at `self.pos`
    fn scan_line_comment(&mut self) -> Zone<'a> {
        let start = self.pos;
        let bytes = self.src.as_bytes();
        let mut end = start + 2;
        while end < bytes.len() && bytes[end] != b'\n' && bytes[end] != b'\r' {
            end += 1;
        }
        // The line break is not part of the zone; it starts the next
        // opaque run.
        let zone = Zone::Translatable {
            kind: DelimiterKind::LineComment,
            payload: &self.src[start + 2..end],
            raw: &self.src[start..end],
        };
        self.pos = end;
        zone
    }

    /// Emit the block or doc comment zone starting at `self.pos`
    fn scan_block_comment(&mut self) -> Zone<'a> {
        let start = self.pos;
        let rest = &self.src[start..];
        // A third `*` marks a doc comment unless it is already the closer
        // (`/**/` is an empty block comment).
        let (kind, opener_len) = if rest.starts_with("/**") && !rest.starts_with("/**/") {
            (DelimiterKind::DocComment, 3)
        } else {
            (DelimiterKind::BlockComment, 2)
        };
        match self.src[start + opener_len..].find("*/") {
            Some(offset) => {
                let close = start + opener_len + offset;
                let zone = Zone::Translatable {
                    kind,
                    payload: &self.src[start + opener_len..close],
                    raw: &self.src[start..close + 2],
                };
                self.pos = close + 2;
                zone
            }
            None => {
                let zone = Zone::Opaque(&self.src[start..]);
                self.pos = self.src.len();
                zone
            }
        }
    }

    /// True if a translatable zone opens at byte index `i`
    fn opens_translatable(&self, i: usize) -> bool {
        let bytes = self.src.as_bytes();
        match bytes[i] {
            b'"' => true,
            b'/' => matches!(bytes.get(i + 1), Some(b'/') | Some(b'*')),
            _ => false,
        }
    }
}

impl<'a> Iterator for ZoneScanner<'a> {
    type Item = Zone<'a>;

    fn next(&mut self) -> Option<Zone<'a>> {
        if self.pos >= self.src.len() {
            return None;
        }

        // A translatable zone opening exactly at the cursor is emitted
        // directly; otherwise we accumulate an opaque run up to the next
        // opener. Char literals are consumed into the opaque run, so their
        // content is never exposed as a payload.
        if self.opens_translatable(self.pos) {
            let bytes = self.src.as_bytes();
            return Some(match bytes[self.pos] {
                b'"' => self.scan_string(),
                _ if bytes.get(self.pos + 1) == Some(&b'/') => self.scan_line_comment(),
                _ => self.scan_block_comment(),
            });
        }

        let start = self.pos;
        let bytes = self.src.as_bytes();
        let mut i = start;
        while i < bytes.len() {
            if bytes[i] == b'\'' {
                i = self.skip_char_literal(i);
                continue;
            }
            if self.opens_translatable(i) {
                break;
            }
            i += 1;
        }
        self.pos = i;
        Some(Zone::Opaque(&self.src[start..i]))
    }
}

/// Source text with every translatable payload removed, delimiters kept.
///
/// Two texts with equal skeletons have the same code structure; this is what
/// the QA pass compares between the source and the translated output.
pub fn skeleton(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for zone in ZoneScanner::new(text) {
        match zone {
            Zone::Opaque(raw) => out.push_str(raw),
            Zone::Translatable { kind, .. } => {
                out.push_str(kind.opener());
                out.push_str(kind.closer());
            }
        }
    }
    out
}
