//! Character reference decoding and special character escaping.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Which flavour of character references is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    /// HTML 4.01 named references (no `&apos;`)
    #[default]
    Html401,
    /// HTML 4.01 named references plus `&apos;`
    Xhtml,
    /// Only `&amp;`, `&lt;`, `&gt;`, `&quot;` and `&apos;`
    Xml1,
}

/// Which quote references are decoded (or escaped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Double quotes only
    #[default]
    Compat,
    /// Double and single quotes
    Quotes,
    /// Neither
    NoQuotes,
}

impl QuoteStyle {
    fn double(self) -> bool {
        matches!(self, QuoteStyle::Compat | QuoteStyle::Quotes)
    }

    fn single(self) -> bool {
        matches!(self, QuoteStyle::Quotes)
    }
}

/// Entity decoding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityOptions {
    /// Reference flavour
    pub doc_type: DocType,
    /// Quote handling
    pub quotes: QuoteStyle,
}

impl EntityOptions {
    /// Create options from a doc type and quote style.
    pub fn new(doc_type: DocType, quotes: QuoteStyle) -> Self {
        Self { doc_type, quotes }
    }
}

/// HTML 4.01 names for U+00A0 through U+00FF, in code point order.
const LATIN1: [&str; 96] = [
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect", "uml", "copy", "ordf",
    "laquo", "not", "shy", "reg", "macr", "deg", "plusmn", "sup2", "sup3", "acute", "micro",
    "para", "middot", "cedil", "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest",
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig", "Ccedil", "Egrave", "Eacute",
    "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml", "ETH", "Ntilde", "Ograve", "Oacute",
    "Ocirc", "Otilde", "Ouml", "times", "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml", "Yacute",
    "THORN", "szlig", "agrave", "aacute", "acirc", "atilde", "auml", "aring", "aelig", "ccedil",
    "egrave", "eacute", "ecirc", "euml", "igrave", "iacute", "icirc", "iuml", "eth", "ntilde",
    "ograve", "oacute", "ocirc", "otilde", "ouml", "divide", "oslash", "ugrave", "uacute",
    "ucirc", "uuml", "yacute", "thorn", "yuml",
];

/// Remaining HTML 4.01 names (symbols, Greek letters and special characters).
const SYMBOLS: &[(&str, u32)] = &[
    ("amp", 38),
    ("lt", 60),
    ("gt", 62),
    ("OElig", 338),
    ("oelig", 339),
    ("Scaron", 352),
    ("scaron", 353),
    ("Yuml", 376),
    ("fnof", 402),
    ("circ", 710),
    ("tilde", 732),
    ("Alpha", 913),
    ("Beta", 914),
    ("Gamma", 915),
    ("Delta", 916),
    ("Epsilon", 917),
    ("Zeta", 918),
    ("Eta", 919),
    ("Theta", 920),
    ("Iota", 921),
    ("Kappa", 922),
    ("Lambda", 923),
    ("Mu", 924),
    ("Nu", 925),
    ("Xi", 926),
    ("Omicron", 927),
    ("Pi", 928),
    ("Rho", 929),
    ("Sigma", 931),
    ("Tau", 932),
    ("Upsilon", 933),
    ("Phi", 934),
    ("Chi", 935),
    ("Psi", 936),
    ("Omega", 937),
    ("alpha", 945),
    ("beta", 946),
    ("gamma", 947),
    ("delta", 948),
    ("epsilon", 949),
    ("zeta", 950),
    ("eta", 951),
    ("theta", 952),
    ("iota", 953),
    ("kappa", 954),
    ("lambda", 955),
    ("mu", 956),
    ("nu", 957),
    ("xi", 958),
    ("omicron", 959),
    ("pi", 960),
    ("rho", 961),
    ("sigmaf", 962),
    ("sigma", 963),
    ("tau", 964),
    ("upsilon", 965),
    ("phi", 966),
    ("chi", 967),
    ("psi", 968),
    ("omega", 969),
    ("thetasym", 977),
    ("upsih", 978),
    ("piv", 982),
    ("ensp", 8194),
    ("emsp", 8195),
    ("thinsp", 8201),
    ("zwnj", 8204),
    ("zwj", 8205),
    ("lrm", 8206),
    ("rlm", 8207),
    ("ndash", 8211),
    ("mdash", 8212),
    ("lsquo", 8216),
    ("rsquo", 8217),
    ("sbquo", 8218),
    ("ldquo", 8220),
    ("rdquo", 8221),
    ("bdquo", 8222),
    ("dagger", 8224),
    ("Dagger", 8225),
    ("bull", 8226),
    ("hellip", 8230),
    ("permil", 8240),
    ("prime", 8242),
    ("Prime", 8243),
    ("lsaquo", 8249),
    ("rsaquo", 8250),
    ("oline", 8254),
    ("frasl", 8260),
    ("euro", 8364),
    ("image", 8465),
    ("weierp", 8472),
    ("real", 8476),
    ("trade", 8482),
    ("alefsym", 8501),
    ("larr", 8592),
    ("uarr", 8593),
    ("rarr", 8594),
    ("darr", 8595),
    ("harr", 8596),
    ("crarr", 8629),
    ("lArr", 8656),
    ("uArr", 8657),
    ("rArr", 8658),
    ("dArr", 8659),
    ("hArr", 8660),
    ("forall", 8704),
    ("part", 8706),
    ("exist", 8707),
    ("empty", 8709),
    ("nabla", 8711),
    ("isin", 8712),
    ("notin", 8713),
    ("ni", 8715),
    ("prod", 8719),
    ("sum", 8721),
    ("minus", 8722),
    ("lowast", 8727),
    ("radic", 8730),
    ("prop", 8733),
    ("infin", 8734),
    ("ang", 8736),
    ("and", 8743),
    ("or", 8744),
    ("cap", 8745),
    ("cup", 8746),
    ("int", 8747),
    ("there4", 8756),
    ("sim", 8764),
    ("cong", 8773),
    ("asymp", 8776),
    ("ne", 8800),
    ("equiv", 8801),
    ("le", 8804),
    ("ge", 8805),
    ("sub", 8834),
    ("sup", 8835),
    ("nsub", 8836),
    ("sube", 8838),
    ("supe", 8839),
    ("oplus", 8853),
    ("otimes", 8855),
    ("perp", 8869),
    ("sdot", 8901),
    ("lceil", 8968),
    ("rceil", 8969),
    ("lfloor", 8970),
    ("rfloor", 8971),
    ("lang", 9001),
    ("rang", 9002),
    ("loz", 9674),
    ("spades", 9824),
    ("clubs", 9827),
    ("hearts", 9829),
    ("diams", 9830),
];

const MAX_NAME_LEN: usize = 8;

fn html401_table() -> &'static HashMap<&'static str, char> {
    static TABLE: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let latin1 = LATIN1
            .iter()
            .zip(0xA0u32..)
            .filter_map(|(name, cp)| char::from_u32(cp).map(|c| (*name, c)));
        let symbols = SYMBOLS
            .iter()
            .filter_map(|(name, cp)| char::from_u32(*cp).map(|c| (*name, c)));
        latin1.chain(symbols).collect()
    })
}

fn lookup_named(name: &str, options: &EntityOptions) -> Option<char> {
    match name {
        "quot" => return options.quotes.double().then_some('"'),
        "apos" => {
            return (options.doc_type != DocType::Html401 && options.quotes.single()).then_some('\'')
        }
        _ => {}
    }
    match options.doc_type {
        DocType::Xml1 => match name {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            _ => None,
        },
        DocType::Html401 | DocType::Xhtml => html401_table().get(name).copied(),
    }
}

fn code_point_allowed(cp: u32, doc_type: DocType) -> bool {
    let common = matches!(cp, 0x09 | 0x0A | 0x0D)
        || ((0xE000..=0x10FFFF).contains(&cp) && cp != 0xFFFE && cp != 0xFFFF);
    match doc_type {
        DocType::Html401 => common || (0x20..=0x7E).contains(&cp) || (0xA0..=0xD7FF).contains(&cp),
        DocType::Xhtml | DocType::Xml1 => common || (0x20..=0xD7FF).contains(&cp),
    }
}

fn lookup_numeric(digits: &str, options: &EntityOptions) -> Option<char> {
    let hex = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X'));
    let cp = match hex {
        Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            u32::from_str_radix(hex, 16).ok()?
        }
        Some(_) => return None,
        None if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            digits.parse::<u32>().ok()?
        }
        None => return None,
    };

    match cp {
        0x22 if !options.quotes.double() => return None,
        0x27 if !options.quotes.single() => return None,
        _ => {}
    }

    if !code_point_allowed(cp, options.doc_type) {
        return None;
    }
    char::from_u32(cp)
}

/// Decode character references back to literal text.
///
/// References must end with `;`. Unknown names, disallowed code points and
/// quote references excluded by the [`QuoteStyle`] are left verbatim. Decoding
/// is a single pass, so `&amp;lt;` becomes `&lt;`.
pub fn decode_entities(text: &str, options: &EntityOptions) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        output.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let decoded = after.find(';').and_then(|semi| {
            let body = &after[..semi];
            let c = match body.strip_prefix('#') {
                Some(digits) => lookup_numeric(digits, options),
                None if body.len() <= MAX_NAME_LEN
                    && !body.is_empty()
                    && body.bytes().all(|b| b.is_ascii_alphanumeric()) =>
                {
                    lookup_named(body, options)
                }
                None => None,
            };
            c.map(|c| (c, semi + 1))
        });

        match decoded {
            Some((c, consumed)) => {
                output.push(c);
                rest = &after[consumed..];
            }
            None => {
                output.push('&');
                rest = after;
            }
        }
    }
    output.push_str(rest);

    output
}

/// Escape `&`, `<`, `>` and the quotes selected by `quotes`.
pub fn escape_special_chars(text: &str, quotes: QuoteStyle) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' if quotes.double() => output.push_str("&quot;"),
            '\'' if quotes.single() => output.push_str("&#039;"),
            _ => output.push(c),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html401() -> EntityOptions {
        EntityOptions::default()
    }

    #[test]
    fn test_table_size() {
        // `quot` is handled separately from the table.
        assert_eq!(html401_table().len() + 1, 252);
    }

    #[test]
    fn test_decode_named() {
        assert_eq!(decode_entities("&auml;", &html401()), "ä");
        assert_eq!(decode_entities("Fish &amp; chips", &html401()), "Fish & chips");
        assert_eq!(decode_entities("&lt;b&gt;", &html401()), "<b>");
        assert_eq!(decode_entities("&euro;&hellip;&Omega;", &html401()), "€…Ω");
        assert_eq!(decode_entities("a&nbsp;b", &html401()), "a\u{A0}b");
    }

    #[test]
    fn test_decode_numeric() {
        assert_eq!(decode_entities("&#228;&#xE4;&#XE4;", &html401()), "äää");
        assert_eq!(decode_entities("&#8364;", &html401()), "€");
    }

    #[test]
    fn test_decode_is_single_pass() {
        assert_eq!(decode_entities("&amp;lt;", &html401()), "&lt;");
    }

    #[test]
    fn test_unknown_and_malformed_left_verbatim() {
        let options = html401();
        assert_eq!(decode_entities("&bogus;", &options), "&bogus;");
        assert_eq!(decode_entities("&amp", &options), "&amp");
        assert_eq!(decode_entities("& ;", &options), "& ;");
        assert_eq!(decode_entities("&#;&#x;&#12a;", &options), "&#;&#x;&#12a;");
        assert_eq!(decode_entities("AT&T", &options), "AT&T");
        assert_eq!(decode_entities("&#99999999999;", &options), "&#99999999999;");
    }

    #[test]
    fn test_disallowed_code_points() {
        let options = html401();
        assert_eq!(decode_entities("&#1;", &options), "&#1;");
        assert_eq!(decode_entities("&#x80;", &options), "&#x80;");
        assert_eq!(decode_entities("&#xD800;", &options), "&#xD800;");
        assert_eq!(decode_entities("&#xFFFF;", &options), "&#xFFFF;");
        assert_eq!(decode_entities("&#9;", &options), "\t");

        let xml = EntityOptions::new(DocType::Xml1, QuoteStyle::Compat);
        assert_eq!(decode_entities("&#x80;", &xml), "\u{80}");
    }

    #[test]
    fn test_quote_styles() {
        let compat = html401();
        assert_eq!(decode_entities("&quot;&#34;&#39;&#x27;", &compat), "\"\"&#39;&#x27;");

        let quotes = EntityOptions::new(DocType::Html401, QuoteStyle::Quotes);
        assert_eq!(decode_entities("&quot;&#39;&#039;", &quotes), "\"''");

        let none = EntityOptions::new(DocType::Html401, QuoteStyle::NoQuotes);
        assert_eq!(decode_entities("&quot;&#34;", &none), "&quot;&#34;");
    }

    #[test]
    fn test_apos_depends_on_doc_type() {
        let html = EntityOptions::new(DocType::Html401, QuoteStyle::Quotes);
        assert_eq!(decode_entities("&apos;", &html), "&apos;");

        let xhtml = EntityOptions::new(DocType::Xhtml, QuoteStyle::Quotes);
        assert_eq!(decode_entities("&apos;", &xhtml), "'");
    }

    #[test]
    fn test_xml_only_knows_basic_names() {
        let xml = EntityOptions::new(DocType::Xml1, QuoteStyle::Quotes);
        assert_eq!(decode_entities("&amp;&lt;&gt;&quot;&apos;", &xml), "&<>\"'");
        assert_eq!(decode_entities("&auml;", &xml), "&auml;");
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape_special_chars("<a & b>", QuoteStyle::Compat), "&lt;a &amp; b&gt;");
        assert_eq!(escape_special_chars("\"'", QuoteStyle::Compat), "&quot;'");
        assert_eq!(escape_special_chars("\"'", QuoteStyle::Quotes), "&quot;&#039;");
        assert_eq!(escape_special_chars("\"'", QuoteStyle::NoQuotes), "\"'");
    }
}
