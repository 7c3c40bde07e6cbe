#[cfg(test)]
mod pointer_test {
    use pointer_stride::{PointerStep, StrideReport};
    use std::ffi::{c_char, c_int};
    use std::mem::size_of;

    #[test]
    fn test_char_pointer_moves_one_byte() {
        let report = StrideReport::capture();
        println!("char step: {}", report.char_step);
        assert_eq!(size_of::<c_char>(), 1);
        assert_eq!(report.char_step.after - report.char_step.before, 1);
    }

    #[test]
    fn test_int_pointer_moves_sizeof_int() {
        let report = StrideReport::capture();
        println!("int step: {}", report.int_step);
        assert_eq!(
            report.int_step.after - report.int_step.before,
            size_of::<c_int>()
        );
        assert_eq!(report.int_step.pointee_size, size_of::<c_int>());
    }

    #[test]
    fn test_synthetic_addresses() {
        let report = StrideReport::from_addresses(0x1000, 0x2000);
        assert_eq!(report.char_step.after, 0x1001);
        assert_eq!(
            report.int_step.after,
            0x2000 + size_of::<c_int>()
        );
        if size_of::<c_int>() == 4 {
            assert_eq!(report.int_step.after, 0x2004);
        }
    }

    #[test]
    fn test_initial_values_do_not_matter() {
        for (c, i) in [(10, 10), (0, 0), (0x7f, c_int::MAX), (c_char::MAX, c_int::MIN)] {
            let report = StrideReport::capture_with(c, i);
            assert_eq!(report.char_step.stride(), 1);
            assert_eq!(report.int_step.stride(), size_of::<c_int>());
        }
    }

    #[test]
    fn test_repeated_captures_keep_strides() {
        for _ in 0..16 {
            let report = StrideReport::capture();
            assert_eq!(report.char_step.stride(), report.char_step.pointee_size);
            assert_eq!(report.int_step.stride(), report.int_step.pointee_size);
        }
    }

    #[test]
    fn test_step_of_array_element() {
        let arr = [10i32, 20, 30, 40];
        let step = PointerStep::of("i32", &arr[1]);
        assert_eq!(step.after, &arr[2] as *const i32 as usize);
    }
}
