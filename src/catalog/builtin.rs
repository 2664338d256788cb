//! Built-in keyword table
//!
//! Bucket order is priority order. Specializations (buy-one-get-one,
//! promo terms) sit ahead of the generic promo bucket.

use crate::models::Intent;

pub(crate) const BUILTIN_BUCKETS: &[(Intent, &[&str])] = &[
    (
        Intent::PromoB1g1,
        &["ซื้อ 1 แถม 1", "ซื้อ1แถม1", "buy 1 get 1", "buy1get1", "b1g1", "1แถม1", "โปร1แถม1"],
    ),
    (
        Intent::PromoTerms,
        &[
            "เงื่อนไขโปร",
            "ใช้โค้ดยังไง",
            "หมดเขตเมื่อไร",
            "โปรหมดเมื่อไหร่",
            "เงื่อนไขโปรโมชั่น",
            "วิธีใช้โค้ด",
        ],
    ),
    (
        Intent::Promo,
        &[
            "โปร",
            "โปรโมชั่น",
            "โปรโมชัน",
            "promotion",
            "promo",
            "discount",
            "ส่วนลด",
            "ลดราคา",
            "โค้ด",
            "code",
            "คูปอง",
            "coupon",
            "voucher",
            "วอยเชอร์",
        ],
    ),
    (
        Intent::Greet,
        &["สวัสดี", "หวัดดี", "ดีครับ", "ดีค่ะ", "hello", "hi", "hey", "ฮัลโหล", "ทัก", "ทักทาย"],
    ),
    (
        Intent::Menu,
        &[
            "เมนู",
            "menu",
            "มีอะไรบ้าง",
            "รายการอาหาร",
            "พิซซ่ามีหน้าอะไร",
            "pizza menu",
            "หน้าอะไรแนะนำ",
            "หน้าไหนอร่อย",
            "เมนูแนะนำ",
        ],
    ),
    (
        Intent::Recommend,
        &["แนะนำ", "recommend", "ตัวไหนดี", "เลือกไม่ถูก", "suggest", "หน้าฮิต", "เมนูฮิต"],
    ),
    (
        Intent::Size,
        &["ขนาด", "size", "ไซส์", "เล็ก กลาง ใหญ่", "s m l", "ไซซ์", "ขนาดพิซซ่า"],
    ),
    (
        Intent::Crust,
        &["ขอบชีส", "ชีสขอบ", "stuffed crust", "crust", "ขอบหนา", "ขอบบาง", "ขอบพิซซ่า"],
    ),
    (
        Intent::Vegetarian,
        &["มังสวิรัติ", "vegetarian", "vegan", "วีแกน", "เจ", "ไม่กินเนื้อ", "ผักล้วน"],
    ),
    (
        Intent::Spicy,
        &["เผ็ด", "spicy", "เผ็ดไหม", "ระดับความเผ็ด", "เผ็ดแค่ไหน"],
    ),
    (
        Intent::Allergen,
        &[
            "แพ้",
            "allergen",
            "ถั่ว",
            "นม",
            "กลูเตน",
            "gluten",
            "lactose",
            "แพ้อาหาร",
            "อาหารปลอด",
        ],
    ),
    (Intent::Halal, &["ฮาลาล", "halal"]),
    (
        Intent::Order,
        &["สั่ง", "order", "วิธีสั่ง", "สั่งยังไง", "กดสั่ง", "เริ่มสั่ง", "สั่งพิซซ่า", "ทำรายการ"],
    ),
    (
        Intent::MinOrder,
        &["ขั้นต่ำ", "min order", "ขั้นต่ำเท่าไหร่", "ยอดขั้นต่ำ", "สั่งขั้นต่ำกี่บาท"],
    ),
    (
        Intent::Hours,
        &[
            "เปิดกี่โมง",
            "ปิดกี่โมง",
            "เวลาเปิด",
            "เวลาปิด",
            "เวลา",
            "เปิด-ปิด",
            "opening hours",
            "close กี่โมง",
        ],
    ),
    (
        Intent::DeliveryArea,
        &[
            "ส่งที่ไหน",
            "พื้นที่จัดส่ง",
            "ส่งได้ที่ไหน",
            "deliver",
            "ครอบคลุม",
            "ส่งต่างจังหวัดไหม",
            "ส่งในพื้นที่",
        ],
    ),
    (
        Intent::DeliveryFee,
        &["ค่าส่ง", "ค่าจัดส่ง", "ค่าส่งเท่าไหร่", "delivery fee", "ค่าส่งแพงไหม"],
    ),
    (
        Intent::DeliveryEta,
        &[
            "กี่นาที",
            "นานไหม",
            "นานแค่ไหน",
            "ใช้เวลาส่ง",
            "delivery time",
            "ถึงเมื่อไหร่",
            "ประมาณกี่นาที",
        ],
    ),
    (
        Intent::TrackOrder,
        &["ติดตาม", "track", "สถานะออเดอร์", "order status", "ตามของ", "ของถึงไหน", "เช็กสถานะ"],
    ),
    (
        Intent::CancelOrder,
        &["ยกเลิก", "cancel", "ขอยกเลิก", "ยกเลิกออเดอร์", "ยกเลิกคำสั่งซื้อ"],
    ),
    (
        Intent::ModifyOrder,
        &[
            "แก้ไขออเดอร์",
            "เปลี่ยนที่อยู่",
            "เปลี่ยนเมนู",
            "แก้ไขคำสั่งซื้อ",
            "เปลี่ยนแปลงออเดอร์",
        ],
    ),
    (
        Intent::Payment,
        &[
            "ชำระเงิน",
            "จ่ายยังไง",
            "payment",
            "ชำระยังไง",
            "วิธีจ่าย",
            "จ่ายเงิน",
            "ช่องทางจ่าย",
            "ชำระค่าบริการ",
        ],
    ),
    (
        Intent::Wallet,
        &[
            "wallet",
            "ทรูวอลเล็ท",
            "true money",
            "truemoney",
            "promptpay",
            "line pay",
            "อีวอลเล็ท",
            "อีวอเลท",
        ],
    ),
    (
        Intent::TaxInvoice,
        &["ใบกำกับภาษี", "ใบเสร็จ", "vat", "e-tax", "ใบกำกับ", "ออกใบกำกับ"],
    ),
    (
        Intent::Branch,
        &["สาขา", "ใกล้ฉัน", "ใกล้บ้าน", "branch", "สาขาใกล้ฉัน", "ค้นหาสาขา", "map สาขา"],
    ),
    (
        Intent::Contact,
        &[
            "เบอร์โทร",
            "โทร",
            "call",
            "contact",
            "ติดต่อ",
            "หมายเลข",
            "คอลเซ็นเตอร์",
            "คอลเซนเตอร์",
            "call center",
        ],
    ),
    (
        Intent::Complaint,
        &["ร้องเรียน", "ไม่พอใจ", "feedback", "คอมเพลน", "แจ้งปัญหา", "ติชม"],
    ),
    (
        Intent::Thanks,
        &["ขอบคุณ", "thanks", "thank you", "thank", "ซาบซึ้ง", "ขอบใจ"],
    ),
];
