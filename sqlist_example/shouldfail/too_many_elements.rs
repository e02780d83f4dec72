use sqlist::{sqlist, SqList};

fn main() {
    let _list: SqList<u8, 2> = sqlist![1, 2, 3; capacity = 2];
}
