//! Buffer pool tests: ownership handoff and recycling

use modshell::pool::BufferPool;

#[test]
fn test_pool_starts_all_available() {
    let pool: BufferPool<4> = BufferPool::new();

    assert_eq!(pool.capacity(), 4);
    assert_eq!(pool.free(), 4);
    assert_eq!(pool.pending(), 0);
}

#[test]
fn test_pool_acquire_exhausts() {
    let mut pool: BufferPool<2> = BufferPool::new();

    let a = pool.acquire().unwrap();
    let b = pool.acquire().unwrap();
    assert!(pool.acquire().is_none());
    assert_eq!(pool.free(), 0);

    pool.release(a);
    pool.release(b);
    assert_eq!(pool.free(), 2);
}

#[test]
fn test_pool_round_trip() {
    let mut pool: BufferPool<4> = BufferPool::new();

    let token = pool.acquire().unwrap();
    pool.buffer_mut(&token).set("net up");
    pool.submit(token);

    assert_eq!(pool.pending(), 1);
    assert_eq!(pool.free(), 3);

    let token = pool.next_ready().unwrap();
    assert_eq!(pool.buffer(&token).as_str(), "net up");

    pool.release(token);
    assert_eq!(pool.free(), 4);
    assert_eq!(pool.pending(), 0);
}

#[test]
fn test_pool_dispatch_is_fifo() {
    let mut pool: BufferPool<3> = BufferPool::new();

    for line in ["first", "second", "third"] {
        let token = pool.acquire().unwrap();
        pool.buffer_mut(&token).set(line);
        pool.submit(token);
    }

    for expected in ["first", "second", "third"] {
        let token = pool.next_ready().unwrap();
        assert_eq!(pool.buffer(&token).as_str(), expected);
        pool.release(token);
    }

    assert!(pool.next_ready().is_none());
}

#[test]
fn test_pool_release_clears_buffer() {
    let mut pool: BufferPool<1> = BufferPool::new();

    let token = pool.acquire().unwrap();
    pool.buffer_mut(&token).set("leftover");
    pool.submit(token);

    let token = pool.next_ready().unwrap();
    pool.release(token);

    // the recycled buffer is indistinguishable from a fresh one
    let token = pool.acquire().unwrap();
    assert!(pool.buffer(&token).is_empty());
    pool.release(token);
}

#[test]
fn test_pool_no_ready_lines_initially() {
    let mut pool: BufferPool<2> = BufferPool::new();
    assert!(pool.next_ready().is_none());
}
