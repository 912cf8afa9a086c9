use crate::bits::*;
use crate::constants::ROM_SIZE;

#[test]
fn positive_round_trip() {
    for n in [0i32, 1, 2, 3, 100, 32767].iter() {
        assert_eq!(to_integer(to_machine_number(*n)) as i32, *n);
    }
}

#[test]
fn negative_round_trip() {
    for n in [-1i32, -2, -100, -32768].iter() {
        assert_eq!(to_integer(to_machine_number(*n)) as i32, *n);
    }
}

#[test]
fn minus_one_is_all_ones() {
    assert_eq!(to_machine_number(-1), 0xFFFF);
}

#[test]
fn bit_array_round_trip() {
    for word in [0x0000u16, 0xFFFF, 0x5A5A, 0x8001].iter() {
        assert_eq!(from_bit_array(to_bit_array(*word)), *word);
    }
}

#[test]
fn bit_array_is_msb_first() {
    assert_eq!(to_bit_array(0x8000)[0], 1);
    assert_eq!(to_bit_array(0x8000)[15], 0);
    assert_eq!(to_bit_array(0x0001)[15], 1);
}

#[test]
fn create_image_pads_to_rom_size() {
    let image = create_image(&[1, 2, 3]);
    assert_eq!(image.len(), ROM_SIZE);
    assert_eq!(&image[..3], &[1, 2, 3]);
    assert_eq!(image[3], 0);
}
