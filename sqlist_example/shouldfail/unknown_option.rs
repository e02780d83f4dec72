use sqlist::{sqlist, SqList};

fn main() {
    let _list: SqList<u8> = sqlist![1, 2; size = 2];
}
