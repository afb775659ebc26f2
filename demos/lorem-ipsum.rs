use justified_text::layout::layout_justified;
use justified_text::pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref};
use justified_text::render::{write_layout, PdfFont, TextEncoding};
use justified_text::{JustifyOptions, LastLinePolicy, Monospace, Pt};

fn main() {
    let size = Pt(11.0);
    // US letter, half-inch margins
    let (page_width, page_height) = (Pt(612.0), Pt(792.0));
    let margin = Pt(36.0);

    let label = format!(
        "{}\n\n« {} » : {}",
        lipsum::lipsum(120),
        lipsum::lipsum_words(6),
        lipsum::lipsum(60)
    );

    let mut options = JustifyOptions::new();
    options
        .max_gap_multiple(2.5)
        .and_then(|o| o.line_spacing(1.15))
        .expect("valid options")
        .last_line(LastLinePolicy::NeverJustify);

    let measurer = Monospace::courier(size);
    let layout = layout_justified(&label, page_width - margin * 2.0, &measurer, &options)
        .expect("can lay out text");

    let mut content = Content::new();
    write_layout(
        &mut content,
        &layout,
        (margin, page_height - margin),
        &PdfFont {
            resource: Name(b"F1"),
            size,
            // Courier ascender is 629 units per 1000 em
            ascent: size * 0.629,
            encoding: TextEncoding::Latin1,
        },
    );

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let content_id = Ref::new(5);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, page_width.0, page_height.0));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources().fonts().pair(Name(b"F1"), font_id);
    page.finish();

    pdf.type1_font(font_id)
        .base_font(Name(b"Courier"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.stream(content_id, &content.finish());

    std::fs::write("lorem-ipsum.pdf", pdf.finish()).expect("can write lorem-ipsum.pdf");
}
