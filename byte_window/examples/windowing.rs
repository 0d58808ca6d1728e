use byte_window::{ByteBuf, Window};

fn main() {
    println!("=== Walking a buffer through a narrowing window ===\n");

    let buf = ByteBuf::from_pod_slice(&[0xAABBu16, 0xCCDD, 0xEEFF]);
    let mut window = Window::full(buf.len());

    while !window.is_empty() {
        let chunk = window.sub(0, 2).expect("buffer length is even");
        println!(
            "  chunk {:?}: {:02x?}",
            chunk.range(),
            &buf.as_slice()[chunk.range()]
        );
        window = window.tail(2).expect("buffer length is even");
    }

    // Out-of-range requests fail closed instead of panicking.
    assert!(window.sub(0, 1).is_none());
    println!("\nexhausted window rejects further narrowing");
}
