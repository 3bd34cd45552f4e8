//! Content stream rendering for pages.

use crate::colour::Colour;
use crate::page::{LineLayout, PageContents, ShapeLayout, SpanLayout, Stroke};
use std::io::Write;

/// Renders page contents to a PDF content stream, converting the high-level
/// content items into low-level PDF operators.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans)?,
            PageContents::Shape(shape) => render_shape(&mut content, shape)?,
            PageContents::Line(line) => render_line(&mut content, line)?,
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.width(),
                    image.position.height(),
                    image.position.x1,
                    image.position.y1
                )?;
                write!(&mut content, "/I{} Do\n", image.image_id.index())?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(content: &mut Vec<u8>, spans: &[SpanLayout]) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font = first.font;
    let mut current_colour = first.colour;
    write!(
        content,
        "/F{} {} Tf\n",
        current_font.font.index(),
        current_font.size
    )?;
    write_fill_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.font.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for byte in span.font.font.encode(&span.text) {
            write!(content, "{byte:02x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_shape(content: &mut Vec<u8>, shape: &ShapeLayout) -> Result<(), std::io::Error> {
    let op = match (shape.fill, shape.stroke) {
        (Some(_), Some(_)) => "B",
        (Some(_), None) => "f",
        (None, Some(_)) => "S",
        (None, None) => return Ok(()),
    };

    write!(content, "q\n")?;
    if let Some(fill) = shape.fill {
        write_fill_colour(content, fill)?;
    }
    if let Some(stroke) = shape.stroke {
        write_stroke(content, stroke)?;
    }
    let r = &shape.rect;
    write!(
        content,
        "{} {} {} {} re {op}\n",
        r.x1,
        r.y1,
        r.width(),
        r.height()
    )?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_line(content: &mut Vec<u8>, line: &LineLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write_stroke(content, line.stroke)?;
    write!(
        content,
        "{} {} m {} {} l S\n",
        line.from.0, line.from.1, line.to.0, line.to.1
    )?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke(content: &mut Vec<u8>, stroke: Stroke) -> Result<(), std::io::Error> {
    match stroke.colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n")?,
        Colour::Grey { g } => write!(content, "{g} G\n")?,
    }
    write!(content, "{} w\n", stroke.width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::page::SpanFont;
    use crate::{Font, Pt, Rect};

    fn text(content: &[u8]) -> String {
        String::from_utf8(content.to_vec()).expect("content streams are ascii")
    }

    #[test]
    fn renders_text_as_hex_win_ansi() {
        let span = SpanLayout {
            text: "Hi µ".into(),
            font: SpanFont {
                font: Font::HelveticaBold,
                size: Pt(9.0),
            },
            colour: colours::BLACK,
            coords: (Pt(10.0), Pt(20.5)),
        };
        let out = text(&render_contents(&[PageContents::Text(vec![span])]).unwrap());
        assert!(out.contains("/F1 9 Tf\n"));
        assert!(out.contains("0 g\n"));
        assert!(out.contains("10 20.5 Td\n<486920b5> Tj\n"));
    }

    #[test]
    fn renders_filled_and_stroked_rectangles() {
        let shape = ShapeLayout {
            rect: Rect::from_origin(Pt(1.0), Pt(2.0), Pt(3.0), Pt(4.0)),
            fill: Some(colours::WHITE),
            stroke: Some(Stroke {
                colour: colours::BLACK,
                width: Pt(0.5),
            }),
        };
        let out = text(&render_contents(&[PageContents::Shape(shape)]).unwrap());
        assert_eq!(out, "q\n1 g\n0 G\n0.5 w\n1 2 3 4 re B\nQ\n");
    }

    #[test]
    fn skips_invisible_shapes() {
        let shape = ShapeLayout {
            rect: Rect::from_origin(Pt(0.0), Pt(0.0), Pt(1.0), Pt(1.0)),
            fill: None,
            stroke: None,
        };
        assert!(render_contents(&[PageContents::Shape(shape)]).unwrap().is_empty());
    }
}
