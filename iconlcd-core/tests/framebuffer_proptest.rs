//! Property-based tests for the framebuffer and frame update path.
//! Verifies packing and sequencing invariants for arbitrary pixel writes.

use iconlcd_core::framebuffer::{PixelBuffer, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};
use iconlcd_core::protocol::flush;
use iconlcd_core::text::{draw_text, text_width};
use iconlcd_hal::mock::{BusEvent, RecordingBus};

const W: i32 = WIDTH as i32;
const H: i32 = HEIGHT as i32;

proptest::proptest! {
    /// Any in-bounds pixel reads back what was written, and clear resets it.
    #[test]
    fn set_get_clear_roundtrip(x in 0..W, y in 0..H) {
        let mut buf = PixelBuffer::new();
        buf.set_pixel(x, y, true);
        assert!(buf.get_pixel(x, y));

        // Exactly one bit is set, at the documented byte and bit
        let index = (y as usize / 8) * WIDTH + x as usize;
        assert_eq!(buf.as_bytes()[index], 1 << (y % 8));
        assert_eq!(buf.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>(), 1);

        buf.clear();
        assert!(!buf.get_pixel(x, y));
        assert!(buf.is_blank());
    }

    /// Writes outside the panel never change an in-bounds pixel.
    #[test]
    fn out_of_bounds_writes_are_ignored(
        x in proptest::prop_oneof![i32::MIN..0, W..i32::MAX],
        y in proptest::num::i32::ANY,
        seed in proptest::collection::vec((0..W, 0..H), 0..32),
    ) {
        let mut buf = PixelBuffer::new();
        for &(sx, sy) in &seed {
            buf.set_pixel(sx, sy, true);
        }
        let before = buf.clone();

        buf.set_pixel(x, y, true);
        buf.set_pixel(x, y, false);
        buf.set_pixel(y.wrapping_abs() % W, if y >= H || y < 0 { y } else { -1 }, true);

        assert_eq!(buf, before);
    }

    /// Clear always yields an all-zero buffer, whatever was drawn before.
    #[test]
    fn clear_zeroes_everything(pixels in proptest::collection::vec((0..W, 0..H, proptest::bool::ANY), 0..256)) {
        let mut buf = PixelBuffer::new();
        for (x, y, on) in pixels {
            buf.set_pixel(x, y, on);
        }
        buf.clear();
        assert_eq!(buf.as_bytes(), &[0u8; BUFFER_SIZE][..]);
    }

    /// A frame update emits exactly the packed buffer, in page/column order,
    /// each page preceded by page select and the column reset pair.
    #[test]
    fn flush_emits_packed_buffer(pixels in proptest::collection::vec((0..W, 0..H), 0..512)) {
        let mut buf = PixelBuffer::new();
        for (x, y) in pixels {
            buf.set_pixel(x, y, true);
        }

        let mut bus = RecordingBus::new();
        flush(&buf, &mut bus).unwrap();

        let events = bus.events();
        assert_eq!(events.len(), PAGES * (WIDTH + 3));

        let mut data_index = 0;
        for (page, block) in events.chunks(WIDTH + 3).enumerate() {
            assert_eq!(block[0], BusEvent::Command(0xB0 + page as u8));
            assert_eq!(block[1], BusEvent::Command(0x00));
            assert_eq!(block[2], BusEvent::Command(0x10));
            for (col, event) in block[3..].iter().enumerate() {
                assert_eq!(*event, BusEvent::Data(buf.read_page_row(page, col)));
                assert_eq!(*event, BusEvent::Data(buf.as_bytes()[data_index]));
                data_index += 1;
            }
        }
        assert_eq!(data_index, BUFFER_SIZE);
    }

    /// Cursor advance is the same whether or not the text is visible.
    #[test]
    fn text_advance_independent_of_position(
        x in -200i32..200,
        y in -20i32..80,
        text in "[ -~\\n\\t]{0,24}",
    ) {
        let mut buf = PixelBuffer::new();
        assert_eq!(draw_text(&mut buf, x, y, &text), x + text_width(&text));
    }
}
